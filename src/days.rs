use std::iter::FusedIterator;

use crate::Date;

/// Iterator over every calendar day between two dates, both inclusive.
///
/// Created by [`DateRange::days`](crate::DateRange::days). Steps are whole calendar
/// days, so month, year and leap-day boundaries are crossed exactly once.
#[derive(Debug, Clone)]
pub struct Days {
    /// Remaining `(front, back)`, or `None` once exhausted
    remaining: Option<(Date, Date)>,
}

impl Days {
    /// Days from `first` to `last` inclusive; empty when `first > last`.
    pub(crate) const fn new(first: Date, last: Date) -> Self {
        let remaining = if first.day_number() <= last.day_number() {
            Some((first, last))
        } else {
            None
        };
        Self { remaining }
    }

    /// Days from `first` up to, but not including, `end`.
    pub(crate) fn until(first: Date, end: Date) -> Self {
        match end.pred() {
            Some(last) => Self::new(first, last),
            None => Self::empty(),
        }
    }

    /// Days strictly after `start` up to `last` inclusive.
    pub(crate) fn after(start: Date, last: Date) -> Self {
        match start.succ() {
            Some(first) => Self::new(first, last),
            None => Self::empty(),
        }
    }

    pub(crate) const fn empty() -> Self {
        Self { remaining: None }
    }
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let (front, back) = self.remaining?;
        self.remaining = if front == back {
            None
        } else {
            front.succ().map(|next| (next, back))
        };
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<Date> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<Date> {
        let (front, back) = self.remaining?;
        self.remaining = if front == back {
            None
        } else {
            back.pred().map(|prev| (front, prev))
        };
        Some(back)
    }
}

impl ExactSizeIterator for Days {
    fn len(&self) -> usize {
        self.remaining
            .map_or(0, |(front, back)| (back.day_number() - front.day_number()) as usize + 1)
    }
}

impl FusedIterator for Days {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_single_day() {
        let days: Vec<Date> = Days::new(date(2022, 1, 5), date(2022, 1, 5)).collect();
        assert_eq!(days, vec![date(2022, 1, 5)]);
    }

    #[test]
    fn test_inverted_bounds_are_empty() {
        let mut days = Days::new(date(2022, 1, 6), date(2022, 1, 5));
        assert_eq!(days.len(), 0);
        assert_eq!(days.next(), None);
    }

    #[test]
    fn test_crosses_year_and_leap_day() {
        let days: Vec<String> = Days::new(date(2023, 12, 30), date(2024, 1, 2))
            .map(|d| d.to_string())
            .collect();
        assert_eq!(days, ["2023-12-30", "2023-12-31", "2024-01-01", "2024-01-02"]);

        let days: Vec<String> = Days::new(date(2024, 2, 28), date(2024, 3, 1))
            .map(|d| d.to_string())
            .collect();
        assert_eq!(days, ["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn test_len_matches_count() {
        let days = Days::new(date(2020, 1, 1), date(2020, 12, 31));
        assert_eq!(days.len(), 366);
        assert_eq!(days.clone().collect::<Vec<_>>().len(), 366);
        assert_eq!(days.count(), 366);
    }

    #[test]
    fn test_double_ended() {
        let mut days = Days::new(date(2022, 1, 1), date(2022, 1, 4));
        assert_eq!(days.next_back(), Some(date(2022, 1, 4)));
        assert_eq!(days.next(), Some(date(2022, 1, 1)));
        assert_eq!(days.len(), 2);
        assert_eq!(days.next_back(), Some(date(2022, 1, 3)));
        assert_eq!(days.next_back(), Some(date(2022, 1, 2)));
        assert_eq!(days.next(), None);
        assert_eq!(days.next_back(), None);
    }

    #[test]
    fn test_until_and_after_exclude_their_anchor() {
        let lower: Vec<Date> = Days::until(date(2022, 1, 1), date(2022, 1, 5)).collect();
        assert_eq!(lower.first(), Some(&date(2022, 1, 1)));
        assert_eq!(lower.last(), Some(&date(2022, 1, 4)));
        assert_eq!(lower.len(), 4);

        let upper: Vec<Date> = Days::after(date(2022, 1, 10), date(2022, 1, 15)).collect();
        assert_eq!(upper.first(), Some(&date(2022, 1, 11)));
        assert_eq!(upper.len(), 5);

        assert_eq!(Days::until(date(2022, 1, 5), date(2022, 1, 5)).len(), 0);
        assert_eq!(Days::after(date(2022, 1, 5), date(2022, 1, 5)).len(), 0);
    }

    #[test]
    fn test_edges_of_supported_calendar() {
        assert_eq!(Days::after(date(9999, 12, 31), date(9999, 12, 31)).len(), 0);
        assert_eq!(Days::until(date(1, 1, 1), date(1, 1, 1)).len(), 0);
        let tail: Vec<Date> = Days::new(date(9999, 12, 30), date(9999, 12, 31)).collect();
        assert_eq!(tail, vec![date(9999, 12, 30), date(9999, 12, 31)]);
    }
}
