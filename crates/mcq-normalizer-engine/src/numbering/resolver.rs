use crate::models::NumberingRef;

use super::{
    counters::ListCounters,
    render::{bullet_glyph, render_value},
    styles::{NumberFormat, StyleLookup},
};

/// Produce the prefix a word processor would render in front of a numbered
/// paragraph, e.g. `"3. "`, `"c) "`, `"iv. "` or `"• "`.
///
/// Advances `counters` by exactly one item at the paragraph's level. Never
/// fails: a paragraph whose style chain cannot be resolved gets a plain
/// decimal prefix from the same counter.
pub fn resolve_prefix<S>(numbering: NumberingRef, styles: &S, counters: &mut ListCounters) -> String
where
    S: StyleLookup + ?Sized,
{
    let NumberingRef { list_id, level } = numbering;
    let count = counters.advance(list_id, level);

    let Some(style) = styles.level_style(list_id, level) else {
        log::debug!("no list style for list {list_id} level {level}, using decimal prefix");
        return format!("{count}. ");
    };

    if style.format == NumberFormat::Bullet {
        return format!("{} ", bullet_glyph(style.template.as_deref()));
    }

    let value = render_value(style.display_value(count), &style.format);
    let Some(template) = style.template.as_deref() else {
        return format!("{value}. ");
    };

    let text = expand_template(template, numbering, &value, styles, counters);
    if text.trim().is_empty() {
        String::new()
    } else {
        format!("{text} ")
    }
}

/// Substitute `%N` placeholders in a level template.
///
/// `%N` refers to level `N - 1`. The paragraph's own level takes `own_value`;
/// shallower levels render their current count in their own format (a level
/// never counted shows its start value). Placeholders for deeper levels are
/// left as written.
fn expand_template<S>(
    template: &str,
    numbering: NumberingRef,
    own_value: &str,
    styles: &S,
    counters: &ListCounters,
) -> String
where
    S: StyleLookup + ?Sized,
{
    let mut out = String::with_capacity(template.len() + own_value.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        let placeholder = match (c, chars.peek().and_then(|d| d.to_digit(10))) {
            ('%', Some(d)) if d >= 1 => d,
            _ => {
                out.push(c);
                continue;
            }
        };
        chars.next();

        let target = (placeholder - 1) as u8;
        if target == numbering.level {
            out.push_str(own_value);
        } else if target < numbering.level {
            out.push_str(&ancestor_value(numbering.list_id, target, styles, counters));
        } else {
            out.push('%');
            out.push_str(&placeholder.to_string());
        }
    }

    out
}

fn ancestor_value<S>(list_id: u32, level: u8, styles: &S, counters: &ListCounters) -> String
where
    S: StyleLookup + ?Sized,
{
    let count = counters.count(list_id, level).unwrap_or(1);
    match styles.level_style(list_id, level) {
        Some(style) if style.format != NumberFormat::Bullet => {
            render_value(style.display_value(count), &style.format)
        }
        _ => count.to_string(),
    }
}
