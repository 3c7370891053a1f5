use crate::domain::{
    recommendation::entities::{Meal, MealSuggestions, RecommendationResult},
    rendering::{
        entities::{MealView, SectionBody, SectionKind, SectionView},
        ports::MarkupRenderer,
    },
};

/// Derives the sections to display for a result, in display order.
///
/// A section is emitted only when its field carries content. Sections never
/// affect each other.
pub fn select_sections<M: MarkupRenderer + ?Sized>(
    result: &RecommendationResult,
    renderer: &M,
) -> Vec<SectionView> {
    let mut sections = Vec::new();

    if let Some(text) = non_blank(result.dietary_recommendations.as_deref()) {
        sections.push(SectionView {
            kind: SectionKind::DietaryOverview,
            body: SectionBody::Markup(renderer.render(text)),
        });
    }

    if let Some(meals) = result.meal_suggestions.as_ref() {
        sections.push(SectionView {
            kind: SectionKind::MealSchedule,
            body: SectionBody::Meals(select_meals(meals, renderer)),
        });
    }

    if let Some(foods) = non_empty(result.foods_to_avoid.as_deref()) {
        sections.push(SectionView {
            kind: SectionKind::FoodsToAvoid,
            body: SectionBody::Foods(foods.to_vec()),
        });
    }

    if let Some(foods) = non_empty(result.recommended_foods.as_deref()) {
        sections.push(SectionView {
            kind: SectionKind::RecommendedFoods,
            body: SectionBody::Foods(foods.to_vec()),
        });
    }

    if let Some(text) = non_blank(result.health_advice.as_deref()) {
        sections.push(SectionView {
            kind: SectionKind::HealthAdvice,
            body: SectionBody::Markup(renderer.render(text)),
        });
    }

    sections
}

fn select_meals<M: MarkupRenderer + ?Sized>(
    meals: &MealSuggestions,
    renderer: &M,
) -> Vec<MealView> {
    Meal::ALL
        .into_iter()
        .filter_map(|meal| {
            non_blank(meals.get(meal)).map(|text| MealView {
                meal,
                body: renderer.render(text),
            })
        })
        .collect()
}

// Empty strings count as absent.
fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

fn non_empty(items: Option<&[String]>) -> Option<&[String]> {
    items.filter(|items| !items.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rendering::{
        entities::{Inline, MarkupBlock},
        markup::LightweightMarkup,
    };

    fn kinds(sections: &[SectionView]) -> Vec<SectionKind> {
        sections.iter().map(|section| section.kind).collect()
    }

    fn full_result() -> RecommendationResult {
        RecommendationResult {
            dietary_recommendations: Some("A low glycemic plan.".to_string()),
            meal_suggestions: Some(MealSuggestions {
                breakfast: Some("Oatmeal with berries".to_string()),
                lunch: Some("Lentil soup".to_string()),
                dinner: Some("Grilled tofu".to_string()),
                snacks: Some("Apple with almond butter".to_string()),
            }),
            foods_to_avoid: Some(vec!["Sugary drinks".to_string()]),
            recommended_foods: Some(vec!["Oats".to_string()]),
            health_advice: Some("- Walk daily".to_string()),
            full_response: Some("raw".to_string()),
        }
    }

    #[test]
    fn test_empty_result_has_no_sections() {
        let sections = select_sections(&RecommendationResult::default(), &LightweightMarkup);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_full_result_keeps_display_order() {
        let sections = select_sections(&full_result(), &LightweightMarkup);

        assert_eq!(
            kinds(&sections),
            vec![
                SectionKind::DietaryOverview,
                SectionKind::MealSchedule,
                SectionKind::FoodsToAvoid,
                SectionKind::RecommendedFoods,
                SectionKind::HealthAdvice,
            ]
        );
    }

    #[test]
    fn test_only_health_advice_renders_one_section() {
        let result = RecommendationResult {
            health_advice: Some("Stay hydrated.".to_string()),
            ..Default::default()
        };

        let sections = select_sections(&result, &LightweightMarkup);

        assert_eq!(kinds(&sections), vec![SectionKind::HealthAdvice]);
        assert_eq!(sections[0].title(), "Evidence-Based Health Advice from Real Studies");
    }

    #[test]
    fn test_only_lunch_renders_one_meal() {
        let result = RecommendationResult {
            meal_suggestions: Some(MealSuggestions {
                lunch: Some("Quinoa salad".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let sections = select_sections(&result, &LightweightMarkup);

        assert_eq!(kinds(&sections), vec![SectionKind::MealSchedule]);
        let SectionBody::Meals(meals) = &sections[0].body else {
            panic!("expected meal sub-sections");
        };
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].meal, Meal::Lunch);
        assert_eq!(meals[0].title(), "Lunch");
    }

    #[test]
    fn test_recommended_foods_keep_server_order() {
        let result = RecommendationResult {
            recommended_foods: Some(vec!["Oats".to_string(), "Lentils".to_string()]),
            ..Default::default()
        };

        let sections = select_sections(&result, &LightweightMarkup);

        assert_eq!(
            sections,
            vec![SectionView {
                kind: SectionKind::RecommendedFoods,
                body: SectionBody::Foods(vec!["Oats".to_string(), "Lentils".to_string()]),
            }]
        );
    }

    #[test]
    fn test_empty_lists_and_strings_are_omitted() {
        let result = RecommendationResult {
            dietary_recommendations: Some(String::new()),
            foods_to_avoid: Some(Vec::new()),
            recommended_foods: Some(Vec::new()),
            health_advice: Some(String::new()),
            ..Default::default()
        };

        assert!(select_sections(&result, &LightweightMarkup).is_empty());
    }

    #[test]
    fn test_meal_object_without_meals_is_still_a_section() {
        let result = RecommendationResult {
            meal_suggestions: Some(MealSuggestions {
                breakfast: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let sections = select_sections(&result, &LightweightMarkup);

        assert_eq!(
            sections,
            vec![SectionView {
                kind: SectionKind::MealSchedule,
                body: SectionBody::Meals(Vec::new()),
            }]
        );
    }

    #[test]
    fn test_missing_section_does_not_suppress_others() {
        let mut result = full_result();
        result.meal_suggestions = None;
        result.foods_to_avoid = None;

        let sections = select_sections(&result, &LightweightMarkup);

        assert_eq!(
            kinds(&sections),
            vec![
                SectionKind::DietaryOverview,
                SectionKind::RecommendedFoods,
                SectionKind::HealthAdvice,
            ]
        );
    }

    #[test]
    fn test_narrative_fields_render_structurally() {
        let sections = select_sections(&full_result(), &LightweightMarkup);
        let advice = sections
            .iter()
            .find(|section| section.kind == SectionKind::HealthAdvice)
            .unwrap();

        assert_eq!(
            advice.body,
            SectionBody::Markup(vec![MarkupBlock::List {
                ordered: false,
                items: vec![vec![MarkupBlock::Paragraph(vec![Inline::Text(
                    "Walk daily".to_string()
                )])]],
            }])
        );
    }
}
