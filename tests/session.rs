//! 세션 컨텍스트(연도 전환, 리셋, 시나리오 파일) 테스트.
use tanker_fleet_toolbox::app::SessionShell;
use tanker_fleet_toolbox::config::Config;
use tanker_fleet_toolbox::fleet::{
    FleetInputError, OwnedShips, Route, ScenarioFile, ScenarioSession, ScenarioYear, ShipCategory,
};
use tanker_fleet_toolbox::reference::defaults::default_route_input;

fn category_keys(session: &ScenarioSession, route: Route) -> Vec<ShipCategory> {
    session.route(route).owned_ships().iter().map(|(c, _)| c).collect()
}

#[test]
fn year_switch_replaces_category_set() {
    let mut session = ScenarioSession::new(ScenarioYear::Y2030);
    session
        .route_mut(Route::VlccChina)
        .set_owned(ShipCategory::B30Eet, 9)
        .expect("2030 category");

    for year in [ScenarioYear::Y2050, ScenarioYear::Y2040, ScenarioYear::Y2030] {
        session.set_year(year);
        assert_eq!(session.year(), year);
        for route in Route::ALL {
            assert_eq!(category_keys(&session, route), year.ship_categories().to_vec());
            assert_eq!(session.route(route).year(), year);
        }
    }
    // 2030으로 돌아와도 이전 편집 값은 남지 않는다.
    assert_eq!(
        session.route(Route::VlccChina).owned_ships().count(ShipCategory::B30Eet),
        0
    );
}

#[test]
fn invalid_category_for_year_is_rejected() {
    let mut ships = OwnedShips::empty(ScenarioYear::Y2050);
    let err = ships.set(ShipCategory::B30, 3).unwrap_err();
    assert_eq!(
        err,
        FleetInputError::CategoryNotValidForYear {
            category: ShipCategory::B30,
            year: ScenarioYear::Y2050,
        }
    );
    assert_eq!(ships.count(ShipCategory::B30), 0);
    assert_eq!(ships.total(), 0);
}

#[test]
fn set_accepts_exactly_the_year_category_list() {
    use ShipCategory::*;
    let every = [
        Diesel, B30, B50, B100, Methanol, Ammonia, B30Eet, B50Eet, B100Eet, BlueH2, Methane,
        VlsfoOccs, EH2, EMethane, EDiesel, BioMethane,
    ];
    for year in ScenarioYear::ALL {
        let mut ships = OwnedShips::empty(year);
        for category in every {
            let allowed = year.allows(category);
            assert_eq!(
                allowed,
                year.ship_categories().contains(&category),
                "{year} {category}"
            );
            assert_eq!(ships.set(category, 2).is_ok(), allowed, "{year} {category}");
            assert_eq!(ships.count(category), if allowed { 2 } else { 0 });
        }
        assert_eq!(ships.total(), 2 * year.ship_categories().len() as u32);
    }
}

#[test]
fn reset_restores_year_defaults() {
    let mut session = ScenarioSession::new(ScenarioYear::Y2040);
    session.route_mut(Route::SuezSing).tco_musd = 1.0;
    session.route_mut(Route::MrNy).charter_count = 99;
    session.reset();
    assert_eq!(session, ScenarioSession::new(ScenarioYear::Y2040));
    assert_eq!(session.route(Route::SuezSing).tco_musd, 500.31);
    assert_eq!(session.route(Route::MrNy).charter_count, 22);
}

#[test]
fn defaults_match_reference_rows() {
    let vlcc = default_route_input(ScenarioYear::Y2030, Route::VlccChina);
    assert_eq!(vlcc.charter_count, 12);
    assert_eq!(vlcc.tco_musd, 538.21);
    assert_eq!(vlcc.owned_ships().count(ShipCategory::Diesel), 4);
    assert_eq!(vlcc.owned_ships().count(ShipCategory::B30), 14);
    assert_eq!(vlcc.owned_ships().total(), 18);

    let afra = default_route_input(ScenarioYear::Y2050, Route::AfraEurope);
    assert_eq!(afra.owned_ships().total(), 0);
    assert_eq!(afra.charter_count, 18);
    assert_eq!(afra.fuel_cost_musd, 0.0);
}

#[test]
fn scenario_file_overrides_listed_routes_only() {
    let src = r#"
year = 2040

[routes.vlcc_china]
charter_count = 3
tco_musd = 100.0
ghg_mt_co2e = 0.5
fuel_cost_musd = 42.0

[routes.vlcc_china.owned_ships]
blue_h2 = 2
diesel = 1
"#;
    let file: ScenarioFile = toml::from_str(src).expect("parse");
    let session = ScenarioSession::from_file(&file).expect("valid");
    let vlcc = session.route(Route::VlccChina);
    assert_eq!(vlcc.charter_count, 3);
    assert_eq!(vlcc.fuel_cost_musd, 42.0);
    assert_eq!(vlcc.owned_ships().count(ShipCategory::BlueH2), 2);
    assert_eq!(vlcc.owned_ships().count(ShipCategory::B50), 0);
    assert_eq!(vlcc.owned_ships().total(), 3);
    assert_eq!(session.route(Route::SuezSing).tco_musd, 500.31);
}

#[test]
fn scenario_file_rejects_bad_entries() {
    let wrong_year_category = r#"
year = 2030
[routes.mr_ny.owned_ships]
e_h2 = 1
"#;
    let file: ScenarioFile = toml::from_str(wrong_year_category).expect("parse");
    assert!(matches!(
        ScenarioSession::from_file(&file),
        Err(FleetInputError::CategoryNotValidForYear { .. })
    ));

    let negative = r#"
year = 2030
[routes.afra_europe]
tco_musd = -1.0
"#;
    let file: ScenarioFile = toml::from_str(negative).expect("parse");
    assert!(matches!(
        ScenarioSession::from_file(&file),
        Err(FleetInputError::NegativeValue { route: Route::AfraEurope, .. })
    ));

    assert!(toml::from_str::<ScenarioFile>("year = 2035").is_err());
}

#[test]
fn scenario_file_roundtrip_keeps_session() {
    let mut session = ScenarioSession::new(ScenarioYear::Y2050);
    session.route_mut(Route::PanaHouston).fuel_cost_musd = 12.5;
    let text = toml::to_string_pretty(&session.to_file()).expect("serialize");
    let file: ScenarioFile = toml::from_str(&text).expect("parse back");
    assert_eq!(ScenarioSession::from_file(&file).expect("valid"), session);
}

#[test]
fn year_parsing() {
    assert_eq!("2040".parse::<ScenarioYear>(), Ok(ScenarioYear::Y2040));
    assert_eq!("2035".parse::<ScenarioYear>(), Err(FleetInputError::UnknownYear(2035)));
    assert!("abc".parse::<ScenarioYear>().is_err());
    assert_eq!(Route::from_key("MR_NY"), Some(Route::MrNy));
}

#[test]
fn shell_drops_report_on_input_changes() {
    let cfg = Config::default();
    let mut shell = SessionShell::new(ScenarioSession::new(ScenarioYear::Y2030));
    assert!(shell.report().is_none());

    shell.analyze(&cfg);
    assert!(shell.report().is_some());
    shell.invalidate();
    assert!(shell.report().is_none());

    shell.analyze(&cfg);
    shell.select_year(ScenarioYear::Y2050);
    assert!(shell.report().is_none());
    assert_eq!(shell.session.year(), ScenarioYear::Y2050);

    shell.analyze(&cfg);
    shell.reset();
    assert!(shell.report().is_none());
}
