// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::{
    ACTION_TYPE_IDENT, AREA_UUID, ActionBody, ActionPayload, ActionPoint, ActionUser, DateRef,
    DraftAddress, EventRef, FALLBACK_GEO_LAT, FALLBACK_GEO_LNG, TerritoryRef, TypeRef,
};
use crate::requests::{Pagination, SetStatusRequest, StaffListRequest, StatusIdent, UuidRef};
use crate::requests::{Availability, TerritoryUuids};
use serde_json::Value;
use tour_planner_domain::Address;

fn sample_payload() -> ActionPayload {
    ActionPayload {
        action: ActionBody {
            new: true,
            ident: String::new(),
            name: String::from("Spring campaign"),
            description: String::new(),
            excerpt: String::new(),
            since: DateRef {
                date: String::from("2026-03-17 14:00:00"),
            },
            until: DateRef {
                date: String::from("2026-03-17 18:00:00"),
            },
            kind: TypeRef {
                ident: String::from(ACTION_TYPE_IDENT),
            },
            territory: TerritoryRef {
                uuid: String::from("t-uuid"),
                ident: String::from("MAZ"),
            },
            area: UuidRef {
                uuid: String::from(AREA_UUID),
            },
            event: EventRef {
                uuid: String::from("e-uuid"),
                name: String::from("Road Show"),
            },
            action_points: vec![ActionPoint {
                trash: false,
                point: UuidRef {
                    uuid: String::from("p-uuid"),
                },
                ident: String::from("WAW_001"),
                name: String::from("Galeria"),
                address: DraftAddress::from_address(&Address::default()),
            }],
            users: vec![ActionUser {
                trash: false,
                uuid: String::from("s-uuid"),
                firstname: String::from("Anna"),
                lastname: String::from("Kowalska"),
                ident: String::from("AK01"),
            }],
        },
    }
}

#[test]
fn test_payload_wire_field_names() {
    let value: Value = serde_json::to_value(sample_payload()).unwrap();
    let action: &Value = &value["action"];

    assert_eq!(action["new"], true);
    assert_eq!(action["type"]["ident"], "Standard");
    assert_eq!(action["since"]["date"], "2026-03-17 14:00:00");
    assert_eq!(action["area"]["uuid"], AREA_UUID);
    assert!(action["actionPoints"].is_array());
    assert_eq!(action["actionPoints"][0]["point"]["uuid"], "p-uuid");
    assert_eq!(
        action["actionPoints"][0]["address"]["streetAddress"],
        ""
    );
    assert_eq!(action["users"][0]["trash"], false);
    assert!(action.get("kind").is_none());
    assert!(action.get("action_points").is_none());
}

#[test]
fn test_draft_address_substitutes_fallback_geo() {
    let address: DraftAddress = DraftAddress::from_address(&Address::default());
    assert_eq!(address.geo_lat, FALLBACK_GEO_LAT);
    assert_eq!(address.geo_lng, FALLBACK_GEO_LNG);
}

#[test]
fn test_draft_address_keeps_known_geo() {
    let source: Address = Address {
        geo_lat: Some(String::from("52.22977000")),
        geo_lng: Some(String::from("21.01178000")),
        ..Address::default()
    };
    let address: DraftAddress = DraftAddress::from_address(&source);
    assert_eq!(address.geo_lat, "52.22977000");
    assert_eq!(address.geo_lng, "21.01178000");
}

#[test]
fn test_draft_address_treats_empty_geo_as_missing() {
    let source: Address = Address {
        geo_lat: Some(String::new()),
        geo_lng: Some(String::new()),
        ..Address::default()
    };
    let address: DraftAddress = DraftAddress::from_address(&source);
    assert_eq!(address.geo_lat, FALLBACK_GEO_LAT);
    assert_eq!(address.geo_lng, FALLBACK_GEO_LNG);
}

#[test]
fn test_pagination_uses_camel_case_page_size() {
    let value: Value = serde_json::to_value(Pagination::first(500)).unwrap();
    assert_eq!(value["page"], 0);
    assert_eq!(value["pageSize"], 500);
}

#[test]
fn test_staff_list_request_shape() {
    let request: StaffListRequest = StaffListRequest {
        pagination: Pagination::first(1000),
        availability: Availability {
            since: String::from("2026-03-17"),
            until: String::from("2026-03-17"),
        },
        territory: TerritoryUuids {
            uuids: vec![String::from("t-uuid")],
        },
    };
    let value: Value = serde_json::to_value(request).unwrap();
    assert_eq!(value["availability"]["since"], "2026-03-17");
    assert_eq!(value["territory"]["uuids"][0], "t-uuid");
}

#[test]
fn test_set_status_request_shape() {
    let request: SetStatusRequest = SetStatusRequest {
        status: StatusIdent {
            ident: String::from("accepted"),
        },
        action: UuidRef {
            uuid: String::from("a-uuid"),
        },
    };
    let value: Value = serde_json::to_value(request).unwrap();
    assert_eq!(value["status"]["ident"], "accepted");
    assert_eq!(value["action"]["uuid"], "a-uuid");
}
