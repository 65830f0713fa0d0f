// ABOUTME: Catalog query planner building one query descriptor per fixed category
// ABOUTME: Pure mapping from UserProfile and Category to SearchQuery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

use crate::catalog::SearchQuery;
use crate::constants::limits;
use crate::models::{Category, DifficultyPreference, UserProfile};

/// Build the four query descriptors for one assembly pass, in the fixed
/// category order. The order matters: it fixes alert emission order and
/// the order categories appear in the kit.
#[must_use]
pub fn plan_queries(profile: &UserProfile) -> Vec<SearchQuery> {
    Category::ALL
        .iter()
        .map(|&category| build_query(profile, category))
        .collect()
}

/// Build the query descriptor for one category.
///
/// Pure mapping; no filtering happens here. The text query is the same
/// goal phrase for every category. The indoor facet applies only to
/// exercise queries, and only when the profile asks for indoor content.
#[must_use]
pub fn build_query(profile: &UserProfile, category: Category) -> SearchQuery {
    let difficulty = match profile.difficulty {
        DifficultyPreference::Any => None,
        DifficultyPreference::Level(level) => Some(level),
    };

    let result_size = if category == Category::Exercise {
        limits::EXERCISE_RESULT_SIZE
    } else {
        limits::DEFAULT_RESULT_SIZE
    };

    SearchQuery {
        text: profile.search_phrase(),
        category,
        difficulty,
        indoor_only: category == Category::Exercise && profile.indoor_only,
        result_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DifficultyLevel;

    fn profile() -> UserProfile {
        UserProfile {
            goals: vec!["weight loss".into(), "endurance".into()],
            difficulty: DifficultyPreference::Level(DifficultyLevel::Advanced),
            indoor_only: true,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_plans_four_queries_in_category_order() {
        let queries = plan_queries(&profile());
        let categories: Vec<Category> = queries.iter().map(|q| q.category).collect();
        assert_eq!(categories, Category::ALL);
    }

    #[test]
    fn test_goal_phrase_is_shared_across_categories() {
        for query in plan_queries(&profile()) {
            assert_eq!(query.text, "weight loss endurance");
        }
    }

    #[test]
    fn test_indoor_facet_applies_only_to_exercise() {
        let queries = plan_queries(&profile());
        assert!(queries[0].indoor_only);
        assert!(queries[1..].iter().all(|q| !q.indoor_only));

        let outdoor_ok = UserProfile {
            indoor_only: false,
            ..profile()
        };
        assert!(plan_queries(&outdoor_ok).iter().all(|q| !q.indoor_only));
    }

    #[test]
    fn test_exercise_gets_more_result_slots() {
        let queries = plan_queries(&profile());
        assert_eq!(queries[0].result_size, 5);
        assert!(queries[1..].iter().all(|q| q.result_size == 3));
    }

    #[test]
    fn test_wildcard_difficulty_drops_the_facet() {
        let anything = UserProfile {
            difficulty: DifficultyPreference::Any,
            ..profile()
        };
        assert!(plan_queries(&anything).iter().all(|q| q.difficulty.is_none()));

        let advanced = plan_queries(&profile());
        assert!(advanced
            .iter()
            .all(|q| q.difficulty == Some(DifficultyLevel::Advanced)));
    }
}
