use apptbook_config::UiConfig;
use apptbook_core::display::tag_labels;
use apptbook_core::{Appointment, Person};
use colored::Colorize;

pub fn render_tags(person: &Person, ui: &UiConfig) -> String {
    tag_labels(&person.tags)
        .into_iter()
        .map(|label| {
            let text = format!("[{}]", label.text);
            if ui.color && label.highlighted {
                let color = ui.child_tag_color;
                text.truecolor(color.0, color.1, color.2).to_string()
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_person(index: usize, person: &Person, ui: &UiConfig) -> String {
    let tags = render_tags(person, ui);
    let header = if tags.is_empty() {
        format!("{}. {}", index, person.name)
    } else {
        format!("{}. {} {}", index, person.name, tags)
    };
    format!(
        "{}\n   {} | {} | {}",
        header, person.phone, person.email, person.address
    )
}

pub fn render_appointment(index: usize, appointment: &Appointment) -> String {
    let mut line = format!(
        "{}. {} {} ({} min)",
        index,
        appointment.name,
        appointment.start.format("%Y-%m-%d %H:%M"),
        appointment.duration_minutes
    );
    if !appointment.attendees.is_empty() {
        line.push_str(" with ");
        line.push_str(&appointment.attendees.join(", "));
    }
    line
}
