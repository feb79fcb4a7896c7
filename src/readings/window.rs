use crate::readings::reading::Reading;
use chrono::NaiveDate;

/// A read-only view of the trailing-window suffix of a
/// [`Dataset`](crate::Dataset).
///
/// Recomputed from the dataset whenever "now" advances; never mutated in
/// place. Order is inherited from the dataset: ascending `(date, time)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowedDataset<'a> {
    readings: &'a [Reading],
    cutoff: NaiveDate,
}

impl<'a> WindowedDataset<'a> {
    pub(crate) fn new(readings: &'a [Reading], cutoff: NaiveDate) -> Self {
        Self { readings, cutoff }
    }

    pub fn readings(&self) -> &'a [Reading] {
        self.readings
    }

    /// The inclusive lower boundary: every reading here has `date >= cutoff`.
    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::readings::dataset::Dataset;
    use crate::readings::error::DatasetError;
    use chrono::NaiveDate;

    fn feed(dates: &[&str]) -> String {
        let mut text = String::from("header\n");
        for date in dates {
            text.push_str(&format!(
                "{date},08:00,21.5,60,1012,300,10,15,5,N,8.2,0\n"
            ));
        }
        text
    }

    #[test]
    fn window_boundary_is_inclusive_at_exactly_n_days_back() {
        let dataset = Dataset::from_feed_text(&feed(&["2024-06-02", "2024-06-03"])).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let window = dataset.select_window(now, 7).unwrap();
        let dates: Vec<_> = window.readings().iter().map(|r| r.date).collect();

        // now - 7 days = 2024-06-03: retained. 2024-06-02: excluded.
        assert_eq!(dates, [NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()]);
        assert_eq!(window.cutoff(), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn empty_window_is_distinct_from_no_valid_data() {
        let dataset = Dataset::from_feed_text(&feed(&["2024-01-01", "2024-01-02"])).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let err = dataset.select_window(now, 7).unwrap_err();
        assert_eq!(
            err,
            DatasetError::EmptyWindow {
                window_days: 7,
                cutoff: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            }
        );
    }

    #[test]
    fn window_is_the_ordered_suffix_of_the_dataset() {
        let dataset = Dataset::from_feed_text(&feed(&[
            "2024-06-01",
            "2024-06-04",
            "2024-06-05",
            "2024-06-09",
        ]))
        .unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let window = dataset.select_window(now, 7).unwrap();
        assert_eq!(window.len(), 3);
        assert_eq!(window.readings(), &dataset.readings()[1..]);
    }

    #[test]
    fn whole_dataset_in_window_when_everything_is_recent() {
        let dataset = Dataset::from_feed_text(&feed(&["2024-06-09", "2024-06-10"])).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let window = dataset.select_window(now, 7).unwrap();
        assert_eq!(window.len(), dataset.len());
    }
}
