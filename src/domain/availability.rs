use chrono::NaiveDate;

use super::{Booking, RoomNumber};

/// Half-open interval overlap: `[a_start, a_end)` intersects
/// `[b_start, b_end)` iff each starts before the other ends.
pub fn intervals_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Existing bookings for `room_number` that collide with the candidate
/// interval `[checkin, checkout)`.
pub fn conflicts<'a>(
    room_number: RoomNumber,
    checkin: NaiveDate,
    checkout: NaiveDate,
    bookings: &'a [Booking],
) -> impl Iterator<Item = &'a Booking> {
    bookings
        .iter()
        .filter(move |b| b.room_number == room_number && b.overlaps(checkin, checkout))
}

/// True iff no existing booking for `room_number` overlaps the candidate
/// interval. Pure function of its inputs; a linear scan of the log.
pub fn is_free(
    room_number: RoomNumber,
    checkin: NaiveDate,
    checkout: NaiveDate,
    bookings: &[Booking],
) -> bool {
    conflicts(room_number, checkin, checkout, bookings)
        .next()
        .is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Room, RoomType, User};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn booking(room_number: RoomNumber, checkin: &str, checkout: &str) -> Booking {
        let user = User::new(1, 100_000);
        let room = Room::new(room_number, RoomType::Standard, 1000);
        Booking::new(&user, &room, date(checkin), date(checkout))
    }

    #[test]
    fn test_intervals_overlap_truth_table() {
        let overlap = |a: (&str, &str), b: (&str, &str)| {
            intervals_overlap(date(a.0), date(a.1), date(b.0), date(b.1))
        };

        // Identical and nested
        assert!(overlap(("2026-07-07", "2026-07-09"), ("2026-07-07", "2026-07-09")));
        assert!(overlap(("2026-07-01", "2026-07-31"), ("2026-07-10", "2026-07-11")));

        // Partial from either side
        assert!(overlap(("2026-07-05", "2026-07-08"), ("2026-07-07", "2026-07-10")));
        assert!(overlap(("2026-07-07", "2026-07-10"), ("2026-07-05", "2026-07-08")));

        // Adjacent intervals share a boundary day but never a night
        assert!(!overlap(("2026-07-05", "2026-07-07"), ("2026-07-07", "2026-07-09")));
        assert!(!overlap(("2026-07-07", "2026-07-09"), ("2026-07-09", "2026-07-11")));

        // Disjoint
        assert!(!overlap(("2026-07-01", "2026-07-03"), ("2026-07-10", "2026-07-12")));
    }

    #[test]
    fn test_is_free_with_no_bookings() {
        assert!(is_free(1, date("2026-07-07"), date("2026-07-08"), &[]));
    }

    #[test]
    fn test_is_free_ignores_other_rooms() {
        let bookings = vec![booking(2, "2026-07-07", "2026-07-10")];
        assert!(is_free(1, date("2026-07-07"), date("2026-07-10"), &bookings));
        assert!(!is_free(2, date("2026-07-07"), date("2026-07-10"), &bookings));
    }

    #[test]
    fn test_is_free_allows_back_to_back_stays() {
        let bookings = vec![booking(1, "2026-07-05", "2026-07-07")];
        // New checkin on the previous checkout day
        assert!(is_free(1, date("2026-07-07"), date("2026-07-09"), &bookings));
        // But one night earlier collides
        assert!(!is_free(1, date("2026-07-06"), date("2026-07-09"), &bookings));
    }

    #[test]
    fn test_conflicts_lists_only_colliding_bookings() {
        let bookings = vec![
            booking(1, "2026-07-01", "2026-07-03"),
            booking(1, "2026-07-05", "2026-07-08"),
            booking(2, "2026-07-05", "2026-07-08"),
        ];

        let hits: Vec<_> =
            conflicts(1, date("2026-07-02"), date("2026-07-06"), &bookings).collect();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|b| b.room_number == 1));
    }
}
