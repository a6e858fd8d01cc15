// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, DEFAULT_DURATION_MS, PLACEHOLDER_MESSAGE, SETTLE_DELAY_MS};
use iced_toast::{
    Error, Position, ProviderConfig, Scope, ToastMessage, ToastOptions, ToastProvider, ToastType,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq, Eq)]
enum AppMessage {
    Closed(&'static str),
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn saved_toast_uses_provider_defaults_and_closes_after_settle() {
    let t0 = Instant::now();
    let mut toasts = ToastProvider::new(ProviderConfig::default());
    let id = toasts
        .scope()
        .use_toast()
        .expect("scope has a provider")
        .show_toast(ToastOptions::success("Saved").on_close(AppMessage::Closed("Saved")));

    let record = toasts.get(id).expect("toast was added");
    assert_eq!(record.position(), Position::TopLeft);
    assert_eq!(record.duration(), ms(DEFAULT_DURATION_MS));
    assert_eq!(record.kind().color(), ToastType::Success.color());

    // Mount on the first tick.
    assert!(toasts.update(ToastMessage::Tick(t0)).is_empty());

    // At 4000 ms the exit animation starts; the record is still registered.
    assert!(toasts.update(ToastMessage::Tick(t0 + ms(4000))).is_empty());
    assert!(toasts.get(id).is_some());

    // At 4300 ms the record leaves and on_close fires.
    let closed = toasts.update(ToastMessage::Tick(t0 + ms(4000 + SETTLE_DELAY_MS)));
    assert_eq!(closed, vec![AppMessage::Closed("Saved")]);
    assert!(toasts.get(id).is_none());
}

#[test]
fn short_error_toast_is_gone_after_its_own_duration() {
    let t0 = Instant::now();
    let mut toasts = ToastProvider::<AppMessage>::default();
    let id = toasts.show_toast(ToastOptions::error("Oops").duration_ms(1000));
    toasts.update(ToastMessage::Tick(t0));

    assert!(toasts.update(ToastMessage::Tick(t0 + ms(999))).is_empty());
    assert!(toasts.popup(id).is_some_and(|popup| popup.is_visible()));

    toasts.update(ToastMessage::Tick(t0 + ms(1000)));
    assert!(toasts.popup(id).is_some_and(|popup| !popup.is_visible()));

    toasts.update(ToastMessage::Tick(t0 + ms(1300)));
    assert!(toasts.is_empty());
}

#[test]
fn two_toasts_in_one_turn_get_distinct_ids_in_order() {
    let mut toasts = ToastProvider::<AppMessage>::default();
    let (first, second) = {
        let mut scope = toasts.scope();
        let mut toaster = scope.use_toast().expect("scope has a provider");
        (
            toaster.show_toast(ToastOptions::new("one")),
            toaster.show_toast(ToastOptions::new("two")),
        )
    };

    assert_ne!(first, second);
    let ids: Vec<_> = toasts.toasts().map(|record| record.id()).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn manual_close_fires_on_close_after_settle_delay_regardless_of_remaining_time() {
    let t0 = Instant::now();
    let mut toasts = ToastProvider::default();
    let id = toasts.show_toast(
        ToastOptions::info("Long")
            .duration_ms(60_000)
            .on_close(AppMessage::Closed("Long")),
    );
    toasts.update(ToastMessage::Tick(t0));

    let pressed = t0 + ms(200);
    assert!(toasts
        .update_at(ToastMessage::Dismiss(id), pressed)
        .is_empty());

    assert!(toasts.update(ToastMessage::Tick(pressed + ms(299))).is_empty());
    assert_eq!(
        toasts.update(ToastMessage::Tick(pressed + ms(300))),
        vec![AppMessage::Closed("Long")]
    );
}

#[test]
fn removal_before_timer_fires_never_closes_twice() {
    let t0 = Instant::now();
    let mut toasts = ToastProvider::default();
    let id = toasts.show_toast(ToastOptions::new("x").on_close(AppMessage::Closed("x")));
    toasts.update(ToastMessage::Tick(t0));

    assert_eq!(toasts.remove(id), Some(AppMessage::Closed("x")));

    let mut later = Vec::new();
    for step in 1..=50 {
        later.extend(toasts.update(ToastMessage::Tick(t0 + ms(step * 100))));
    }
    assert!(later.is_empty());
    assert_eq!(toasts.remove(id), None);
}

#[test]
fn remove_of_absent_id_leaves_others_untouched() {
    let mut toasts = ToastProvider::<AppMessage>::default();
    let gone = toasts.show_toast(ToastOptions::new("gone"));
    let kept = toasts.show_toast(ToastOptions::new("kept"));
    toasts.remove(gone);

    assert_eq!(toasts.remove(gone), None);

    let ids: Vec<_> = toasts.toasts().map(|record| record.id()).collect();
    assert_eq!(ids, vec![kept]);
}

#[test]
fn settings_are_fixed_at_creation() {
    let t0 = Instant::now();
    let mut toasts = ToastProvider::<AppMessage>::default();
    let id = toasts.show_toast(ToastOptions::new("early"));
    toasts.update(ToastMessage::Tick(t0));

    toasts.set_config(
        ProviderConfig::default()
            .with_position(Position::BottomRight)
            .with_duration(ms(100)),
    );

    let record = toasts.get(id).expect("toast exists");
    assert_eq!(record.position(), Position::TopLeft);
    assert_eq!(record.duration(), ms(DEFAULT_DURATION_MS));

    // The new 100 ms default must not shorten the existing toast.
    toasts.update(ToastMessage::Tick(t0 + ms(1000)));
    assert!(toasts.popup(id).is_some_and(|popup| popup.is_visible()));
}

#[test]
fn missing_fields_never_fail() {
    let mut toasts = ToastProvider::<AppMessage>::new(
        ProviderConfig::default().with_position(Position::BottomLeft),
    );
    let id = toasts.show_toast(ToastOptions::default().duration(Duration::ZERO));

    let record = toasts.get(id).expect("toast exists");
    assert_eq!(record.message(), PLACEHOLDER_MESSAGE);
    assert_eq!(record.kind(), ToastType::Info);
    assert_eq!(record.position(), Position::BottomLeft);
    assert_eq!(record.duration(), ms(DEFAULT_DURATION_MS));
}

#[test]
fn hook_outside_any_provider_is_a_usage_error() {
    let mut scope = Scope::<AppMessage>::detached();
    let err = scope.use_toast().err().expect("no provider encloses this scope");
    assert_eq!(err, Error::NoProvider);
}

#[test]
fn ids_stay_unique_across_a_burst() {
    let mut toasts = ToastProvider::<AppMessage>::default();
    let ids: HashSet<_> = (0..1000)
        .map(|i| toasts.show_toast(ToastOptions::new(format!("burst-{i}"))))
        .collect();

    assert_eq!(ids.len(), 1000);
    assert_eq!(toasts.len(), 1000);
}

#[test]
fn provider_built_from_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toasts.toml");
    let saved = ProviderConfig::default()
        .with_position(Position::TopRight)
        .with_duration(ms(2500));
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let mut toasts = ToastProvider::<AppMessage>::new(loaded);
    let id = toasts.show_toast(ToastOptions::warning("Careful"));

    let record = toasts.get(id).expect("toast exists");
    assert_eq!(record.position(), Position::TopRight);
    assert_eq!(record.duration(), ms(2500));
}
