pub mod options;
pub mod remote;

pub use options::OptionsController;
pub use remote::RemoteController;

/// Every command the remote understands, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, clap::Parser)]
pub enum Command {
    TvOn,
    TvOff,
    VolumeUp,
    VolumeDown,
    BrightnessUp,
    BrightnessDown,
    ContrastUp,
    ContrastDown,
    OptionsShow,
    VolumeMute,
    VolumeUnmute,
    SetDefaultOptions,
}

impl Command {
    /// The fixed command table, in the order names are resolved.
    pub const ALL: [Command; 12] = [
        Command::TvOn,
        Command::TvOff,
        Command::VolumeUp,
        Command::VolumeDown,
        Command::BrightnessUp,
        Command::BrightnessDown,
        Command::ContrastUp,
        Command::ContrastDown,
        Command::OptionsShow,
        Command::VolumeMute,
        Command::VolumeUnmute,
        Command::SetDefaultOptions,
    ];

    /// Display name matched case-sensitively by the dispatcher.
    pub fn name(self) -> &'static str {
        match self {
            Command::TvOn => "Tv On",
            Command::TvOff => "Tv Off",
            Command::VolumeUp => "Volume Up",
            Command::VolumeDown => "Volume Down",
            Command::BrightnessUp => "Options change brightness up",
            Command::BrightnessDown => "Options change brightness down",
            Command::ContrastUp => "Options change contrast up",
            Command::ContrastDown => "Options change contrast down",
            Command::OptionsShow => "Options show",
            Command::VolumeMute => "Volume Mute",
            Command::VolumeUnmute => "Volume Unmute",
            Command::SetDefaultOptions => "Options set default",
        }
    }
}
