//! Integration tests for plugin settings normalization

use folio::adapters::memory::MemoryStore;
use folio::core::export::ExportSettings;
use std::time::Duration;

#[tokio::test]
async fn defaults_when_namespace_is_empty() {
    let store = MemoryStore::new();
    let settings = ExportSettings::load(&store).await.unwrap();

    assert_eq!(settings.export_dir, None);
    assert_eq!(settings.generation_timeout, None);
    assert_eq!(settings.mathjax_delay, Duration::from_millis(10_000));
    assert_eq!(settings.category_filter, None);
}

#[tokio::test]
async fn timeout_is_read_in_seconds() {
    let store = MemoryStore::new();
    store.seed_config("folio", "pdfgenerationtimeout", "30");

    let settings = ExportSettings::load(&store).await.unwrap();
    assert_eq!(settings.generation_timeout, Some(Duration::from_secs(30)));
}

#[tokio::test]
async fn non_positive_timeout_disables_it() {
    for raw in ["", "0", "-5"] {
        let store = MemoryStore::new();
        store.seed_config("folio", "pdfgenerationtimeout", raw);

        let settings = ExportSettings::load(&store).await.unwrap();
        assert_eq!(settings.generation_timeout, None, "raw value {raw:?}");
    }
}

#[tokio::test]
async fn delay_is_converted_to_milliseconds() {
    let store = MemoryStore::new();
    store.seed_config("folio", "mathjaxdelay", "3");

    let settings = ExportSettings::load(&store).await.unwrap();
    assert_eq!(settings.mathjax_delay, Duration::from_millis(3_000));
}

#[tokio::test]
async fn invalid_delay_falls_back_to_default() {
    for raw in ["0", "-2", "not-a-number"] {
        let store = MemoryStore::new();
        store.seed_config("folio", "mathjaxdelay", raw);

        let settings = ExportSettings::load(&store).await.unwrap();
        assert_eq!(
            settings.mathjax_delay,
            Duration::from_millis(10_000),
            "raw value {raw:?}"
        );
    }
}

#[tokio::test]
async fn malformed_values_do_not_error() {
    let store = MemoryStore::new();
    store.seed_config("folio", "pdfgenerationtimeout", "soon");
    store.seed_config("folio", "mathjaxdelay", "a while");

    // Lenient policy: bad input self-heals to defaults instead of failing.
    let settings = ExportSettings::load(&store).await.unwrap();
    assert_eq!(settings.generation_timeout, None);
    assert_eq!(settings.mathjax_delay, Duration::from_millis(10_000));
}

#[tokio::test]
async fn raw_fields_pass_through_unvalidated() {
    let store = MemoryStore::new();
    store.seed_config("folio", "pdfexportdir", "/srv/exports");
    store.seed_config("folio", "catfilter", "12,13");

    let settings = ExportSettings::load(&store).await.unwrap();
    assert_eq!(settings.export_dir.as_deref(), Some("/srv/exports"));
    assert_eq!(settings.category_filter.as_deref(), Some("12,13"));
}
