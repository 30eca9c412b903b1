use tvremote::RemoteController;

#[test]
fn show_options_default_values() {
    let mut remote = RemoteController::new();

    assert_eq!(
        remote.call("Options show"),
        "Options:\nIsOnline False\nVolume 30\nBrightness 20\nContrast 20"
    );
}

#[test]
fn brightness_up() {
    let mut remote = RemoteController::new();
    remote.call("Tv On");
    remote.call("Options change brightness up");

    assert_eq!(
        remote.call("Options show"),
        "Options:\nIsOnline True\nVolume 30\nBrightness 30\nContrast 20"
    );
}

#[test]
fn set_default_after_change() {
    let mut remote = RemoteController::new();
    remote.call("Tv On");
    remote.call("Options change brightness up");
    remote.call("Options change contrast up");
    // Command names are case-sensitive; this one does not match "Volume Up".
    remote.call("Volume up");
    remote.call("Options set default");

    assert_eq!(
        remote.call("Options show"),
        "Options:\nIsOnline True\nVolume 30\nBrightness 20\nContrast 20"
    );
}

#[test]
fn mute_volume() {
    let mut remote = RemoteController::new();
    remote.call("Tv On");
    remote.call("Volume Mute");

    assert_eq!(
        remote.call("Options show"),
        "Options:\nIsOnline True\nVolume 0\nBrightness 20\nContrast 20"
    );
}

#[test]
fn mute_and_unmute_volume() {
    let mut remote = RemoteController::new();
    remote.call("Tv On");
    remote.call("Volume Mute");

    assert_eq!(
        remote.call("Options show"),
        "Options:\nIsOnline True\nVolume 0\nBrightness 20\nContrast 20"
    );

    remote.call("Volume Unmute");

    assert_eq!(
        remote.call("Options show"),
        "Options:\nIsOnline True\nVolume 30\nBrightness 20\nContrast 20"
    );
}

#[test]
fn volume_clamps_under_repeated_dispatch() {
    let mut remote = RemoteController::new();
    remote.call("Tv On");

    for _ in 0..12 {
        remote.call("Volume Up");
    }

    assert_eq!(remote.options().volume(), 100);
}

#[test]
fn unknown_command_is_a_silent_noop() {
    let mut remote = RemoteController::new();
    remote.call("Tv On");

    let before = remote.call("Options show");
    assert_eq!(remote.call("Tv Explode"), "");
    assert_eq!(remote.call(""), "");
    assert_eq!(remote.call("tv on"), "");
    assert_eq!(remote.call("Options show"), before);
}

#[test]
fn non_display_commands_return_empty_output() {
    let mut remote = RemoteController::new();

    assert_eq!(remote.call("Tv On"), "");
    assert_eq!(remote.call("Volume Up"), "");
    assert_eq!(remote.call("Volume Mute"), "");
    assert_eq!(remote.call("Options set default"), "");
}

#[test]
fn offline_adjustments_leave_options_unchanged() {
    let mut remote = RemoteController::new();

    remote.call("Volume Up");
    remote.call("Options change brightness up");
    remote.call("Options change contrast down");

    assert_eq!(
        remote.call("Options show"),
        "Options:\nIsOnline False\nVolume 30\nBrightness 20\nContrast 20"
    );
}
