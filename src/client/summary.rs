//! Per-coffee summaries of a user's notes.

use std::collections::HashMap;

use crate::model::{coffee::CoffeeDto, note::NoteDto};

#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeSummary {
    pub coffee: CoffeeDto,
    pub notes: Vec<NoteDto>,
    pub average_rating: f64,
    pub total_notes: usize,
}

/// Groups notes by their embedded coffee.
///
/// Groups appear in the order their coffee is first seen. Notes without an
/// embedded coffee are skipped. An empty slice yields an empty result.
pub fn summarize_notes(notes: &[NoteDto]) -> Vec<CoffeeSummary> {
    let mut summaries: Vec<CoffeeSummary> = Vec::new();
    let mut index_by_coffee: HashMap<i32, usize> = HashMap::new();

    for note in notes {
        let Some(coffee) = note.coffee.as_ref() else {
            continue;
        };

        let index = *index_by_coffee.entry(coffee.id).or_insert_with(|| {
            summaries.push(CoffeeSummary {
                coffee: coffee.clone(),
                notes: Vec::new(),
                average_rating: 0.0,
                total_notes: 0,
            });
            summaries.len() - 1
        });

        summaries[index].notes.push(note.clone());
    }

    for summary in summaries.iter_mut() {
        summary.total_notes = summary.notes.len();
        summary.average_rating = overall_average(&summary.notes).unwrap_or_default();
    }

    summaries
}

/// Mean rating across all notes, `None` when there are none.
pub fn overall_average(notes: &[NoteDto]) -> Option<f64> {
    if notes.is_empty() {
        return None;
    }

    let sum: i64 = notes.iter().map(|note| i64::from(note.rating)).sum();
    Some(sum as f64 / notes.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee(id: i32) -> CoffeeDto {
        CoffeeDto {
            id,
            name: format!("Coffee {}", id),
            description: String::new(),
            cafe_id: Some(1),
            cafe: None,
        }
    }

    fn note(id: i32, rating: i32, coffee_id: Option<i32>) -> NoteDto {
        NoteDto {
            id,
            rating,
            comment: String::new(),
            coffee_id: None,
            user_id: None,
            coffee: coffee_id.map(coffee),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(summarize_notes(&[]).is_empty());
        assert_eq!(overall_average(&[]), None);
    }

    #[test]
    fn groups_two_notes_for_one_coffee() {
        let notes = vec![note(1, 4, Some(9)), note(2, 2, Some(9))];

        let summaries = summarize_notes(&notes);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].coffee.id, 9);
        assert_eq!(summaries[0].total_notes, 2);
        assert_eq!(summaries[0].average_rating, 3.0);
    }

    #[test]
    fn keeps_first_seen_order() {
        let notes = vec![
            note(1, 5, Some(4)),
            note(2, 1, Some(9)),
            note(3, 3, Some(4)),
            note(4, 2, Some(7)),
        ];

        let summaries = summarize_notes(&notes);

        let order: Vec<i32> = summaries.iter().map(|s| s.coffee.id).collect();
        assert_eq!(order, vec![4, 9, 7]);
        let note_ids: Vec<i32> = summaries[0].notes.iter().map(|n| n.id).collect();
        assert_eq!(note_ids, vec![1, 3]);
    }

    #[test]
    fn totals_and_means_match_each_group() {
        let notes = vec![
            note(1, 5, Some(1)),
            note(2, 4, Some(2)),
            note(3, 4, Some(1)),
            note(4, 1, Some(1)),
            note(5, 3, Some(2)),
        ];

        for summary in summarize_notes(&notes) {
            let group: Vec<&NoteDto> = notes
                .iter()
                .filter(|n| n.coffee.as_ref().map(|c| c.id) == Some(summary.coffee.id))
                .collect();
            let mean = group.iter().map(|n| n.rating as f64).sum::<f64>() / group.len() as f64;

            assert_eq!(summary.total_notes, group.len());
            assert!((summary.average_rating - mean).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn skips_notes_without_coffee() {
        let notes = vec![note(1, 5, None), note(2, 3, Some(2))];

        let summaries = summarize_notes(&notes);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total_notes, 1);
        assert_eq!(summaries[0].average_rating, 3.0);
    }
}
