use prep_core::model::Difficulty;

#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "badge badge--easy",
        Difficulty::Medium => "badge badge--medium",
        Difficulty::Hard => "badge badge--hard",
    }
}

#[cfg(test)]
mod tests {
    use super::difficulty_class;
    use prep_core::model::Difficulty;

    #[test]
    fn classes_are_distinct_per_difficulty() {
        let classes = [
            difficulty_class(Difficulty::Easy),
            difficulty_class(Difficulty::Medium),
            difficulty_class(Difficulty::Hard),
        ];
        assert_eq!(
            classes.len(),
            classes.iter().collect::<std::collections::HashSet<_>>().len()
        );
    }
}
