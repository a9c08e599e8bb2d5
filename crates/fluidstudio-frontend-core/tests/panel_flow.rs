use std::cell::Cell;
use std::time::Instant;

use fluidstudio_core::controls::format_value;
use fluidstudio_core::{ConfigStore, MemoryStore, NumericControlSpec, ParamId, PostFxEffectId};
use fluidstudio_frontend_core::{
    CaptureHost, InteractionConfig, MouseButton, MouseEvent, PanelToStore, SliderInteraction,
    StoreToPanel, TrackGeometry, dispatch, handle_message, post_fx_rows,
};

#[derive(Default)]
struct CountingHost {
    held: Cell<i32>,
}

impl CaptureHost for &CountingHost {
    fn capture_pointer(&self, _pointer_id: u32) {
        self.held.set(self.held.get() + 1);
    }

    fn release_pointer(&self, _pointer_id: u32) {
        self.held.set(self.held.get() - 1);
    }
}

fn press(x: f32) -> MouseEvent {
    MouseEvent::ButtonDown {
        button: MouseButton::Left,
        pointer_id: 7,
        x,
        y: 4.0,
    }
}

#[test]
fn press_at_half_track_commits_five() {
    let spec = NumericControlSpec::new(0.0, 10.0)
        .unwrap()
        .step(0.05)
        .unwrap();
    let host = CountingHost::default();
    let mut slider = SliderInteraction::new(
        &host,
        TrackGeometry::new(0.0, 300.0),
        InteractionConfig::default(),
    );

    let value = slider
        .handle_mouse(&press(150.0), &spec, Instant::now())
        .expect("press on the track yields a value");
    assert_eq!(value, 5.0);
    assert_eq!(format_value(value, spec.display_precision()), "5.00");
    assert_eq!(host.held.get(), 1);

    drop(slider);
    assert_eq!(host.held.get(), 0, "unmount must release capture");
}

#[test]
fn slider_drag_flows_into_store() {
    let store = MemoryStore::default();
    let param = ParamId::Vorticity;
    let host = CountingHost::default();
    let mut slider = SliderInteraction::new(
        &host,
        TrackGeometry::new(10.0, 100.0),
        InteractionConfig::default(),
    )
    .with_reset_value(param.default_value());

    let now = Instant::now();
    let current = param.read(&store.config(), &store.sim_config());
    let spec = param.control_spec(current).unwrap();
    let value = slider.handle_mouse(&press(60.0), &spec, now).unwrap();
    dispatch(&store, PanelToStore::SetParam { param, value }).unwrap();

    assert_eq!(store.sim_config().vorticity, 25.0);
    assert_eq!(store.revision(), 1);
}

#[test]
fn post_fx_panel_round_trip() {
    let store = MemoryStore::default();

    let rows = post_fx_rows(&store.config());
    let grain = rows.iter().find(|r| r.id == PostFxEffectId::Grain).unwrap();
    dispatch(&store, grain.toggle_message().unwrap()).unwrap();
    dispatch(
        &store,
        grain
            .move_message(fluidstudio_core::Direction::Decrease)
            .unwrap(),
    )
    .unwrap();

    let rows = post_fx_rows(&store.config());
    let grain_pos = rows.iter().position(|r| r.id == PostFxEffectId::Grain).unwrap();
    let clarity_pos = rows.iter().position(|r| r.id == PostFxEffectId::Clarity).unwrap();
    assert!(grain_pos < clarity_pos);
    assert!(rows[grain_pos].active);
    assert_eq!(store.config().noise_intensity, 0.15);
}

#[test]
fn json_messages_drive_the_store() {
    let store = MemoryStore::default();
    let messages = [
        r##"{"type":"SetTint","data":{"hex":"#ff8000"}}"##,
        r#"{"type":"ToggleEffect","data":{"effect":"afterImage"}}"#,
        r#"{"type":"ApplyDelta","data":{"delta":{"target":"sim","delta":{"paused":true}}}}"#,
    ];
    for text in messages {
        let message = PanelToStore::from_json(text).unwrap();
        assert!(matches!(
            handle_message(&store, message),
            StoreToPanel::ConfigUpdated { .. }
        ));
    }

    let render = store.config();
    assert_eq!(render.tint.to_hex(), "#ff8000");
    assert!(render.after_image_enabled);
    assert!(store.sim_config().paused);
}
