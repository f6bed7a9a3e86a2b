//! Plain-text rendering of the list controller's state.

use std::fmt::Write;

use todolist_core::{ListController, PendingAction, StatusFilter, TodoStatus};

/// Filter tabs, then one numbered line per visible todo.
///
/// Numbers are 1-based positions in the visible list; the shell's
/// `:toggle <n>` and `:delete <n>` refer to them.
pub fn render(list: &ListController) -> String {
    let mut out = String::new();
    let counts = list.counts();

    let tabs: Vec<String> = StatusFilter::TABS
        .iter()
        .map(|&filter| {
            let label = format!("{filter} {}", counts.for_filter(filter));
            if filter == list.filter() {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join(" "));

    let visible = list.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "  (nothing here)");
        return out;
    }
    for (n, item) in visible.iter().enumerate() {
        let line = match item.status {
            TodoStatus::Pending => format!("[ ] {}", item.body),
            TodoStatus::Completed => format!("[x] ~{}~", item.body),
        };
        let busy = list.is_in_flight(PendingAction::Toggle(item.id)) || list.is_in_flight(PendingAction::Delete(item.id));
        let _ = writeln!(out, "{:>3}. {line}{}", n + 1, if busy { " (busy)" } else { "" });
    }
    out
}
