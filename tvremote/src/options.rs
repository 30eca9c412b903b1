const MIN_VALUE: i32 = 0;
const MAX_VALUE: i32 = 100;
const VALUE_OF_OPTION_CHANGE: i32 = 10;

const DEFAULT_VOLUME: i32 = 30;
const DEFAULT_BRIGHTNESS: i32 = 20;
const DEFAULT_CONTRAST: i32 = 20;

#[derive(Debug, Default)]
struct TvOptions {
    is_online: bool,
    volume: i32,
    brightness: i32,
    contrast: i32,
}

/// Bounded device state behind the remote: power, volume, brightness and
/// contrast, plus mute bookkeeping. Volume, brightness and contrast stay in
/// [0, 100] after every operation.
#[derive(Debug)]
pub struct OptionsController {
    options: TvOptions,
    is_volume_muted: bool,
    volume_before_mute: i32,
}

impl OptionsController {
    pub fn new() -> Self {
        let mut controller = Self {
            options: TvOptions::default(),
            is_volume_muted: false,
            volume_before_mute: 0,
        };
        controller.set_default_options();
        controller
    }

    /// Restores the default volume/brightness/contrast and clears mute.
    /// Power state is left alone.
    pub fn set_default_options(&mut self) {
        self.options.volume = DEFAULT_VOLUME;
        self.options.brightness = DEFAULT_BRIGHTNESS;
        self.options.contrast = DEFAULT_CONTRAST;

        self.is_volume_muted = false;
        self.volume_before_mute = self.options.volume;
    }

    pub fn turn_on(&mut self) {
        self.options.is_online = true;
    }

    pub fn turn_off(&mut self) {
        self.options.is_online = false;
    }

    pub fn increase_volume(&mut self) {
        self.step_volume(VALUE_OF_OPTION_CHANGE);
    }

    pub fn decrease_volume(&mut self) {
        self.step_volume(-VALUE_OF_OPTION_CHANGE);
    }

    // Adjusting while muted unmutes first, so the step applies to the
    // pre-mute volume.
    fn step_volume(&mut self, delta: i32) {
        if !self.options.is_online {
            return;
        }

        if self.is_volume_muted {
            self.unmute_volume();
        }

        self.options.volume = normalize(self.options.volume + delta);
    }

    /// Mute is not gated on power, unlike every other adjustment. The
    /// asymmetry is pinned by tests; change it only with product sign-off.
    pub fn mute_volume(&mut self) {
        self.is_volume_muted = true;
        self.volume_before_mute = self.options.volume;
        self.options.volume = MIN_VALUE;
    }

    pub fn unmute_volume(&mut self) {
        self.is_volume_muted = false;
        self.options.volume = self.volume_before_mute;
    }

    pub fn increase_brightness(&mut self) {
        self.step_brightness(VALUE_OF_OPTION_CHANGE);
    }

    pub fn decrease_brightness(&mut self) {
        self.step_brightness(-VALUE_OF_OPTION_CHANGE);
    }

    fn step_brightness(&mut self, delta: i32) {
        if !self.options.is_online {
            return;
        }

        self.options.brightness = normalize(self.options.brightness + delta);
    }

    pub fn increase_contrast(&mut self) {
        self.step_contrast(VALUE_OF_OPTION_CHANGE);
    }

    pub fn decrease_contrast(&mut self) {
        self.step_contrast(-VALUE_OF_OPTION_CHANGE);
    }

    fn step_contrast(&mut self, delta: i32) {
        if !self.options.is_online {
            return;
        }

        self.options.contrast = normalize(self.options.contrast + delta);
    }

    /// Renders the visible options as a fixed-order text block, one
    /// `<Label> <Value>` line per attribute under an `Options:` header.
    /// No trailing newline.
    pub fn options_to_show(&self) -> String {
        let rows = [
            ("IsOnline", bool_label(self.options.is_online).to_string()),
            ("Volume", self.options.volume.to_string()),
            ("Brightness", self.options.brightness.to_string()),
            ("Contrast", self.options.contrast.to_string()),
        ];

        let mut text = String::from("Options:");
        for (label, value) in &rows {
            text.push('\n');
            text.push_str(label);
            text.push(' ');
            text.push_str(value);
        }

        text
    }

    pub fn is_online(&self) -> bool {
        self.options.is_online
    }

    pub fn volume(&self) -> i32 {
        self.options.volume
    }

    pub fn brightness(&self) -> i32 {
        self.options.brightness
    }

    pub fn contrast(&self) -> i32 {
        self.options.contrast
    }

    pub fn is_volume_muted(&self) -> bool {
        self.is_volume_muted
    }
}

impl Default for OptionsController {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(value: i32) -> i32 {
    if value < MIN_VALUE {
        MIN_VALUE
    } else if value > MAX_VALUE {
        MAX_VALUE
    } else {
        value
    }
}

fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
