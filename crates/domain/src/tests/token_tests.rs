// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::token::{EventToken, PointToken, StaffToken, TerritoryToken};
use crate::types::{Address, Event, Point, Staff, Territory};

fn sample_point() -> Point {
    Point {
        uuid: String::from("p-uuid"),
        ident: String::from("WAW_001"),
        name: String::from("Galeria Centrum"),
        address: Address {
            street_address: Some(String::from("Marszałkowska")),
            street_number: Some(String::from("104")),
            city_name: Some(String::from("Warszawa")),
            postal_code: Some(String::from("00-017")),
            geo_lat: Some(String::from("52.22977000")),
            geo_lng: Some(String::from("21.01178000")),
        },
    }
}

#[test]
fn test_territory_token_round_trip() {
    let territory: Territory = Territory {
        uuid: String::from("t-uuid"),
        ident: String::from("MAZ"),
    };
    let raw: String = TerritoryToken::encode(&territory);
    assert_eq!(raw, "t-uuid|MAZ");

    let token: TerritoryToken = TerritoryToken::parse(&raw).unwrap();
    assert_eq!(token.uuid, "t-uuid");
    assert_eq!(token.ident, "MAZ");
}

#[test]
fn test_territory_token_rejects_empty() {
    let err: DomainError = TerritoryToken::parse("").unwrap_err();
    assert_eq!(err, DomainError::EmptyToken { field: "territory" });
}

#[test]
fn test_territory_token_rejects_missing_parts() {
    let err: DomainError = TerritoryToken::parse("only-uuid").unwrap_err();
    assert!(matches!(err, DomainError::MalformedToken { .. }));
}

#[test]
fn test_territory_token_rejects_empty_identifier() {
    let err: DomainError = TerritoryToken::parse("|MAZ").unwrap_err();
    assert!(matches!(
        err,
        DomainError::MalformedToken {
            field: "territory",
            expected_parts: 2
        }
    ));
}

#[test]
fn test_event_token_round_trip() {
    let event: Event = Event {
        uuid: String::from("e-uuid"),
        name: String::from("Road Show"),
    };
    let raw: String = EventToken::encode(&event);
    let token: EventToken = EventToken::parse(&raw).unwrap();
    assert_eq!(token.uuid, "e-uuid");
    assert_eq!(token.name, "Road Show");
}

#[test]
fn test_point_token_round_trip_reconstructs_address() {
    let point: Point = sample_point();
    let raw: String = PointToken::encode(&point);

    let token: PointToken = PointToken::parse(&raw).unwrap();
    assert_eq!(token.uuid, "p-uuid");
    assert_eq!(token.ident, "WAW_001");
    assert_eq!(token.name, "Galeria Centrum");
    assert_eq!(token.address, point.address);
}

#[test]
fn test_point_token_tolerates_unreadable_address() {
    let token: PointToken = PointToken::parse("u|i|n|not-json").unwrap();
    assert_eq!(token.address, Address::default());
}

#[test]
fn test_point_token_rejects_too_few_parts() {
    let err: DomainError = PointToken::parse("u|i|n").unwrap_err();
    assert!(matches!(
        err,
        DomainError::MalformedToken {
            field: "point",
            expected_parts: 4
        }
    ));
}

#[test]
fn test_staff_token_round_trip() {
    let staff: Staff = Staff {
        uuid: String::from("s-uuid"),
        firstname: String::from("Anna"),
        lastname: String::from("Kowalska"),
        ident: String::from("AK01"),
    };
    let raw: String = StaffToken::encode(&staff);
    assert_eq!(raw, "s-uuid|Anna|Kowalska|AK01");

    let token: StaffToken = StaffToken::parse(&raw).unwrap();
    assert_eq!(token.firstname, "Anna");
    assert_eq!(token.lastname, "Kowalska");
    assert_eq!(token.ident, "AK01");
}

#[test]
fn test_staff_token_rejects_empty_identifier() {
    let err: DomainError = StaffToken::parse("|Anna|Kowalska|AK01").unwrap_err();
    assert!(matches!(err, DomainError::MalformedToken { .. }));
}
