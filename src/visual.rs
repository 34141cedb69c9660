use serde::{Deserialize, Serialize};

use crate::{CalendarDate, SelectionState, YearMonth, prelude::*};

/// How a single day cell is drawn. Derived from the selection, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayVisualState {
    /// Outside the month being laid out; shown only to fill a week row.
    #[display(fmt = "preview")]
    Preview,
    /// The selection start or end.
    #[display(fmt = "selected")]
    Selected,
    /// Strictly between the endpoints of a complete selection.
    #[display(fmt = "highlighted")]
    Highlighted,
    #[display(fmt = "normal")]
    Normal,
}

impl DayVisualState {
    pub const ALL: [Self; 4] = [Self::Preview, Self::Selected, Self::Highlighted, Self::Normal];

    /// Projects `selection` onto `date` as it appears in `shown_month`'s grid.
    ///
    /// Preview takes precedence: a day borrowed from a neighbouring month is
    /// drawn as preview even when it is selected, since the same day appears
    /// again in its own month.
    pub fn project(date: CalendarDate, shown_month: YearMonth, selection: &SelectionState) -> Self {
        if !shown_month.contains(date) {
            Self::Preview
        } else if selection.is_boundary(date) {
            Self::Selected
        } else if selection.is_highlighted(date) {
            Self::Highlighted
        } else {
            Self::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, selection, year_month};

    #[test]
    fn test_project_cases() {
        struct TestCase {
            date:        CalendarDate,
            selection:   SelectionState,
            expected:    DayVisualState,
            description: &'static str,
        }

        let march = year_month(2024, 3);
        let complete = selection(Some(date(2024, 3, 5)), Some(date(2024, 3, 9)));
        let lone = selection(Some(date(2024, 3, 5)), None);

        let cases = [
            TestCase {
                date:        date(2024, 3, 5),
                selection:   complete,
                expected:    DayVisualState::Selected,
                description: "start",
            },
            TestCase {
                date:        date(2024, 3, 9),
                selection:   complete,
                expected:    DayVisualState::Selected,
                description: "end",
            },
            TestCase {
                date:        date(2024, 3, 6),
                selection:   complete,
                expected:    DayVisualState::Highlighted,
                description: "inside range",
            },
            TestCase {
                date:        date(2024, 3, 10),
                selection:   complete,
                expected:    DayVisualState::Normal,
                description: "after range",
            },
            TestCase {
                date:        date(2024, 3, 6),
                selection:   lone,
                expected:    DayVisualState::Normal,
                description: "after a lone start",
            },
            TestCase {
                date:        date(2024, 3, 6),
                selection:   SelectionState::empty(),
                expected:    DayVisualState::Normal,
                description: "nothing selected",
            },
            TestCase {
                date:        date(2024, 2, 29),
                selection:   SelectionState::empty(),
                expected:    DayVisualState::Preview,
                description: "previous month filler",
            },
            TestCase {
                date:        date(2024, 4, 1),
                selection:   selection(Some(date(2024, 3, 30)), Some(date(2024, 4, 2))),
                expected:    DayVisualState::Preview,
                description: "next month filler inside the range",
            },
        ];

        for case in &cases {
            assert_eq!(
                DayVisualState::project(case.date, march, &case.selection),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_out_of_order_selection_highlights_nothing() {
        let reversed = selection(Some(date(2024, 3, 9)), Some(date(2024, 3, 5)));
        let march = year_month(2024, 3);

        assert_eq!(DayVisualState::project(date(2024, 3, 7), march, &reversed), DayVisualState::Normal);
        assert_eq!(DayVisualState::project(date(2024, 3, 5), march, &reversed), DayVisualState::Selected);
    }

    #[test]
    fn test_display_and_serde_names() {
        for state in DayVisualState::ALL {
            let json = serde_json::to_string(&state).expect("serialize state");
            assert_eq!(json, format!("\"{state}\""));
        }
    }
}
