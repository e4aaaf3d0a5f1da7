use std::fmt::{self, Write};

use super::render::{CalendarLabels, MonthView, YearView};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

impl YearView {
    /// Markup injected into a `[data-calendar-year]` container.
    pub fn to_html(&self, labels: &CalendarLabels) -> String {
        let mut html = String::new();
        // `fmt::Write` for `String` never returns an error.
        let _ = self.write_year(&mut html, labels);
        html
    }

    fn write_year(&self, html: &mut String, labels: &CalendarLabels) -> fmt::Result {
        write!(html, r#"<div class="calendar-year" data-year="{}">"#, escape(&self.id))?;
        for quarter in &self.quarters {
            write!(
                html,
                r#"<section class="calendar-quarter" data-quarter="{}"><h3 class="calendar-quarter__title">{}</h3><div class="calendar-quarter__months">"#,
                quarter.number,
                escape(&quarter.title)
            )?;
            for month in &quarter.months {
                self.write_month(html, month, labels)?;
            }
            html.push_str("</div></section>");
        }
        html.push_str("</div>");
        Ok(())
    }

    fn write_month(&self, html: &mut String, month: &MonthView, labels: &CalendarLabels) -> fmt::Result {
        let (modifier, count_modifier) = if month.short {
            (" calendar-month--short", " calendar-month__count--short")
        } else {
            ("", "")
        };
        write!(
            html,
            r#"<article class="calendar-month{modifier}" data-month="{}" aria-label="{}"><header class="calendar-month__header"><span class="calendar-month__name">{}</span><span class="calendar-month__count{count_modifier}">{}</span></header><div class="calendar-month__weekdays">"#,
            month.index,
            escape(&month.title),
            escape(&month.name),
            escape(&month.count_label)
        )?;
        for (i, name) in self.weekdays.iter().enumerate() {
            let weekend = if i >= 5 { " calendar-weekday--weekend" } else { "" };
            write!(html, r#"<span class="calendar-weekday{weekend}">{}</span>"#, escape(name))?;
        }
        html.push_str(r#"</div><div class="calendar-month__days">"#);
        for cell in &month.days {
            let mut class = String::from("calendar-day");
            if cell.weekend {
                class.push_str(" calendar-day--weekend");
            }
            match &cell.holiday {
                Some(tag) => write!(
                    html,
                    r#"<span class="{class} calendar-day--holiday holiday-{tag}" data-holiday="{tag}" title="{}">{}</span>"#,
                    escape(labels.holiday_name(tag)),
                    cell.day,
                    tag = escape(tag),
                )?,
                None => write!(html, r#"<span class="{class}">{}</span>"#, cell.day)?,
            }
        }
        html.push_str("</div></article>");
        Ok(())
    }
}
