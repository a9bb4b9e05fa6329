//! Terminal rendering of questions.

use comfy_table::{Cell, Table};

use kerbquiz_core::judge::{BlankStatus, Judgment};
use kerbquiz_core::model::{BlankId, SegmentKind};
use kerbquiz_core::Question;

/// The quote with each blank shown as `[id: ?]`, `[id: placed]` or, once
/// revealed, `[id: answer]`. One line per saying.
pub fn quote_text(question: &Question, judgment: &Judgment) -> String {
    let store = question.store();
    let mut out = String::new();
    let mut line = String::new();

    for (s, segment) in question.segmented().segments.iter().enumerate() {
        for (b, bit) in segment.bits.iter().enumerate() {
            if !bit.is_term() {
                line.push_str(&bit.text);
                continue;
            }
            let id = BlankId::new(s, b);
            let shown = if judgment.revealed {
                bit.text.as_str()
            } else {
                store.occupant(id).map_or("?", |c| c.term.as_str())
            };
            line.push_str(&format!("[{id}: {shown}]"));
        }
        if segment.kind == SegmentKind::Saying {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                out.push_str(trimmed);
                out.push('\n');
            }
            line.clear();
        }
    }
    if !line.trim().is_empty() {
        out.push_str(line.trim());
        out.push('\n');
    }
    out
}

/// Unplaced candidates with the index to use in `move` commands.
pub fn tray_line(question: &Question) -> String {
    let tray = question.store().tray();
    if tray.is_empty() {
        return "Tray: (empty)".to_string();
    }
    let items: Vec<String> = tray
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{i}] {}", c.term))
        .collect();
    format!("Tray: {}", items.join("  "))
}

pub fn status_table(question: &Question, judgment: &Judgment) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Blank", "Placed", "Status"]);

    for (id, status) in &judgment.per_blank {
        let placed = question
            .store()
            .occupant(*id)
            .map_or_else(|| "-".to_string(), |c| c.term.clone());
        let status = match status {
            BlankStatus::Correct => "correct",
            BlankStatus::Wrong => "wrong",
            BlankStatus::Empty => "empty",
        };
        table.add_row(vec![
            Cell::new(id.to_string()),
            Cell::new(placed),
            Cell::new(status),
        ]);
    }
    table
}

/// Full view: topic, quote, tray and progress.
pub fn question_view(question: &Question, judgment: &Judgment) -> String {
    let progress = if judgment.revealed {
        "Answers revealed".to_string()
    } else {
        format!(
            "Placed {}/{} blanks, {} correct",
            judgment.filled_count(),
            judgment.per_blank.len(),
            judgment.correct_count()
        )
    };
    format!(
        "({})\n{}\n{}\n{progress}",
        question.quote().topic,
        quote_text(question, judgment).trim_end(),
        tray_line(question),
    )
}
