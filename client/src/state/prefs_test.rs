use super::*;

#[test]
fn defaults_are_glass_english_rupees() {
    let prefs = Preferences::load(Store::in_memory());
    assert_eq!(prefs.theme.get(), Theme::Glass);
    assert_eq!(prefs.language.get(), Language::En);
    assert_eq!(prefs.currency.get(), CurrencyCode::Inr);
}

#[test]
fn theme_cycles_through_all_four() {
    let prefs = Preferences::load(Store::in_memory());
    let seen: Vec<Theme> = (0..4).map(|_| prefs.cycle_theme()).collect();
    assert_eq!(seen, vec![Theme::Light, Theme::Dark, Theme::Amoled, Theme::Glass]);
}

#[test]
fn theme_persists_as_json_string() {
    let store = Store::in_memory();
    let prefs = Preferences::load(store.clone());
    prefs.set_theme(Theme::Amoled);
    assert_eq!(store.raw(keys::THEME).as_deref(), Some("\"amoled\""));
    assert_eq!(Preferences::load(store).theme.get(), Theme::Amoled);
}

#[test]
fn theme_backgrounds_match_palette() {
    assert_eq!(Theme::Dark.background(), "#0f172a");
    assert_eq!(Theme::Amoled.background(), "#000000");
    assert!(Theme::Light.background().contains("#F7F9FC"));
    apply_theme(Theme::Light);
}

#[test]
fn language_translates_known_keys_and_falls_back() {
    assert_eq!(Language::Hi.t("Dashboard"), "डैशबोर्ड");
    assert_eq!(Language::Te.t("Tools"), "సాధనాలు");
    assert_eq!(Language::Ta.t("Settings"), "Settings");
    assert_eq!(Language::Te.next(), Language::En);
}

#[test]
fn currency_change_reaches_every_clone() {
    let prefs = Preferences::load(Store::in_memory());
    let other_view = prefs.clone();
    prefs.set_currency(CurrencyCode::Usd);
    assert_eq!(other_view.currency.get(), CurrencyCode::Usd);
    assert_eq!(other_view.format_amount(1234.5), "$1,234.5");
}

#[test]
fn reload_picks_up_writes_from_elsewhere() {
    let store = Store::in_memory();
    let prefs = Preferences::load(store.clone());
    store.set(keys::CURRENCY, &CurrencyCode::Eur).unwrap();
    store.set(keys::LANGUAGE, &Language::Ta).unwrap();
    prefs.reload();
    assert_eq!(prefs.currency.get(), CurrencyCode::Eur);
    assert_eq!(prefs.language.get(), Language::Ta);
    assert_eq!(prefs.t("Tools"), "கருவிகள்");
}
