use console::{StyledObject, style};
use nourish_core::domain::{
    recommendation::value_objects::RequestState,
    rendering::entities::{Inline, MarkupBlock, SectionBody, SectionView},
    session::entities::SessionView,
};

const RESULTS_TITLE: &str = "Your AI-Generated Diet Plan";
const PROFILE_TITLE: &str = "Your Health Profile";

/// Draws the form and the state of the submit affordance.
pub fn render_form(view: &SessionView) -> String {
    let profile = &view.profile;
    let mut lines = heading(PROFILE_TITLE, '=');

    lines.push(format!("Health Conditions: {}", or_dash(&profile.health_conditions)));
    lines.push(format!("Allergies & Intolerances: {}", or_dash(&profile.allergies)));
    lines.push(format!(
        "Are you vegetarian? {}",
        profile.is_vegetarian.label()
    ));
    lines.push(String::new());

    let button = format!("[ {} ]", view.submit_label);
    lines.push(if view.submit_enabled {
        button
    } else {
        format!("{button} (disabled)")
    });

    lines.join("\n")
}

/// Draws the results area: nothing while idle or pending, the error
/// message on failure, the selected sections on success.
pub fn render_results(view: &SessionView, show_raw: bool) -> String {
    match &view.state {
        RequestState::Idle | RequestState::Pending => String::new(),
        RequestState::Failed { message } => format!("Error: {message}"),
        RequestState::Success { result } => {
            let mut lines = heading(RESULTS_TITLE, '=');

            for section in &view.sections {
                lines.extend(render_section(section));
                lines.push(String::new());
            }

            if show_raw && let Some(raw) = result.full_response.as_deref() {
                lines.extend(heading("Full Response", '-'));
                lines.extend(raw.lines().map(str::to_string));
                lines.push(String::new());
            }

            lines.join("\n").trim_end().to_string()
        }
    }
}

fn render_section(section: &SectionView) -> Vec<String> {
    let mut lines = heading(section.title(), '-');

    match &section.body {
        SectionBody::Markup(blocks) => lines.extend(render_blocks(blocks, "")),
        SectionBody::Foods(foods) => {
            lines.extend(foods.iter().map(|food| format!("  • {food}")));
        }
        SectionBody::Meals(meals) => {
            for meal in meals {
                lines.push(format!("{}:", meal.title()));
                lines.extend(render_blocks(&meal.body, "  "));
            }
        }
    }

    lines
}

fn render_blocks(blocks: &[MarkupBlock], indent: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            MarkupBlock::Heading { level, content } => {
                lines.push(format!("{indent}{}", render_inlines(content)));
                let underline = if *level <= 2 { '=' } else { '-' };
                lines.push(format!(
                    "{indent}{}",
                    underline
                        .to_string()
                        .repeat(plain_text(content).chars().count())
                ));
            }
            MarkupBlock::Paragraph(content) => {
                lines.push(format!("{indent}{}", render_inlines(content)));
            }
            MarkupBlock::List { ordered, items } => {
                let nested_indent = format!("{indent}    ");
                for (index, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}.", index + 1)
                    } else {
                        "•".to_string()
                    };
                    let mut item_lines = render_blocks(item, &nested_indent).into_iter();
                    let first = item_lines
                        .next()
                        .map(|line| line.trim_start().to_string())
                        .unwrap_or_default();
                    lines.push(format!("{indent}  {marker} {first}"));
                    lines.extend(item_lines);
                }
            }
            MarkupBlock::CodeBlock(code) => {
                lines.extend(
                    code.lines()
                        .map(|line| format!("{indent}    {}", style(line).cyan())),
                );
            }
            MarkupBlock::Rule => lines.push(format!("{indent}{}", "─".repeat(24))),
        }
    }

    lines
}

fn render_inlines(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|inline| styled(inline).to_string())
        .collect()
}

fn styled(inline: &Inline) -> StyledObject<&str> {
    let text = style(inline.text());
    match inline {
        Inline::Text(_) => text,
        Inline::Strong(_) => text.bold(),
        Inline::Emphasis(_) => text.italic(),
        Inline::Code(_) => text.cyan(),
    }
}

fn plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::text).collect()
}

fn heading(title: &str, underline: char) -> Vec<String> {
    vec![
        title.to_string(),
        underline.to_string().repeat(title.chars().count()),
    ]
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
