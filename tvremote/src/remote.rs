use crate::options::OptionsController;
use crate::Command;

/// Resolves command names against the fixed table and applies the matching
/// command to one [`OptionsController`].
pub struct RemoteController {
    controller: OptionsController,
    commands: [Command; 12],
}

impl RemoteController {
    pub fn new() -> Self {
        Self {
            controller: OptionsController::new(),
            commands: Command::ALL,
        }
    }

    /// Dispatches a command by display name. The first command whose name
    /// matches exactly is executed; unknown names do nothing. The returned
    /// text is empty for everything except "Options show".
    pub fn call(&mut self, name: &str) -> String {
        match self.commands.iter().find(|cmd| cmd.name() == name) {
            Some(&cmd) => self.execute(cmd),
            None => String::new(),
        }
    }

    /// Typed dispatch, used once a command has already been decoded.
    pub fn execute(&mut self, cmd: Command) -> String {
        let controller = &mut self.controller;

        match cmd {
            Command::TvOn => controller.turn_on(),
            Command::TvOff => controller.turn_off(),
            Command::VolumeUp => controller.increase_volume(),
            Command::VolumeDown => controller.decrease_volume(),
            Command::BrightnessUp => controller.increase_brightness(),
            Command::BrightnessDown => controller.decrease_brightness(),
            Command::ContrastUp => controller.increase_contrast(),
            Command::ContrastDown => controller.decrease_contrast(),
            Command::OptionsShow => return controller.options_to_show(),
            Command::VolumeMute => controller.mute_volume(),
            Command::VolumeUnmute => controller.unmute_volume(),
            Command::SetDefaultOptions => controller.set_default_options(),
        }

        String::new()
    }

    pub fn options(&self) -> &OptionsController {
        &self.controller
    }
}

impl Default for RemoteController {
    fn default() -> Self {
        Self::new()
    }
}
