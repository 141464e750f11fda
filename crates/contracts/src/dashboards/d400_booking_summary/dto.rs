use serde::{Deserialize, Serialize};

/// Response of the booking summary endpoint.
///
/// The wire format is camelCase; `start_date`/`end_date` echo the requested
/// window and are empty strings when the server applied its default window.
/// Ordering of offices, rooms and consumptions is preserved as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummaryResponse {
    pub start_date: String,
    pub end_date: String,
    pub total_bookings: u32,
    pub total_participants: u32,
    pub offices: Vec<OfficeSummary>,
}

/// One office with its aggregated rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeSummary {
    pub office_name: String,
    pub rooms: Vec<RoomSummary>,
}

/// Aggregated bookings of one room within the requested window.
///
/// `booking_start_date`/`booking_end_date` are `YYYY-MM-DD`;
/// `start_time`/`end_time` are RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub room_name: String,
    pub booking_start_date: String,
    pub booking_end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub booking_count: u32,
    pub total_participants: u32,
    pub consumptions: Vec<ConsumptionSummary>,
}

/// One consumption line item of a room. `total_cost` is an integer rupiah
/// amount; the per-room total is derived at presentation time, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionSummary {
    pub consumption_name: String,
    pub count: u32,
    pub total_cost: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_summary_payload() {
        let payload = r#"{
            "startDate": "2024-03-01",
            "endDate": "2024-03-31",
            "totalBookings": 12,
            "totalParticipants": 87,
            "offices": [
                {
                    "officeName": "Jakarta HQ",
                    "rooms": [
                        {
                            "roomName": "Borobudur",
                            "bookingStartDate": "2024-03-04",
                            "bookingEndDate": "2024-03-28",
                            "startTime": "2024-03-04T08:00:00Z",
                            "endTime": "2024-03-28T17:00:00Z",
                            "bookingCount": 7,
                            "totalParticipants": 52,
                            "consumptions": [
                                {"consumptionName": "Snack Siang", "count": 5, "totalCost": 250000},
                                {"consumptionName": "Makan Siang", "count": 3, "totalCost": 450000}
                            ]
                        },
                        {
                            "roomName": "Prambanan",
                            "bookingStartDate": "2024-03-11",
                            "bookingEndDate": "2024-03-11",
                            "startTime": "2024-03-11T09:30:00Z",
                            "endTime": "2024-03-11T11:00:00Z",
                            "bookingCount": 1,
                            "totalParticipants": 6,
                            "consumptions": []
                        }
                    ]
                }
            ]
        }"#;

        let summary: BookingSummaryResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(summary.total_bookings, 12);
        assert_eq!(summary.total_participants, 87);
        assert_eq!(summary.offices.len(), 1);

        let office = &summary.offices[0];
        assert_eq!(office.office_name, "Jakarta HQ");
        assert_eq!(office.rooms.len(), 2);

        let room = &office.rooms[0];
        assert_eq!(room.room_name, "Borobudur");
        assert_eq!(room.booking_count, 7);
        assert_eq!(room.consumptions[0].consumption_name, "Snack Siang");
        assert_eq!(room.consumptions[1].total_cost, 450000);

        assert!(office.rooms[1].consumptions.is_empty());
    }

    #[test]
    fn decode_order_is_preserved() {
        let payload = r#"{
            "startDate": "",
            "endDate": "",
            "totalBookings": 0,
            "totalParticipants": 0,
            "offices": [
                {"officeName": "Surabaya", "rooms": []},
                {"officeName": "Bandung", "rooms": []},
                {"officeName": "Jakarta HQ", "rooms": []}
            ]
        }"#;

        let summary: BookingSummaryResponse = serde_json::from_str(payload).unwrap();
        let names: Vec<&str> = summary
            .offices
            .iter()
            .map(|o| o.office_name.as_str())
            .collect();
        assert_eq!(names, ["Surabaya", "Bandung", "Jakarta HQ"]);
    }
}
