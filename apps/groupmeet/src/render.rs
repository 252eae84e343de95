//! Terminal rendering of the CLI views.

use colored::Colorize;
use groupmeet_async::types::StudentMatch;
use groupmeet_core::AvailabilitySelection;
use groupmeet_core::calendar::CalendarGrid;
use groupmeet_core::presentation::{
    DashboardView, GroupCard, GroupDetailView, MatchStats, MemberLine, PendingCard, READY_STATUS,
};
use groupmeet_core::slot::PreferenceSlot;

const BAR_WIDTH: usize = 20;

pub fn dashboard(view: &DashboardView) {
    match view {
        DashboardView::Empty { explanation } => {
            println!("{}", "No study groups yet".bold());
            println!("{explanation}");
            println!("Run {} to get started.", "groupmeet join".cyan());
        }
        DashboardView::Content { groups, pending } => {
            if !groups.is_empty() {
                println!("{}", "Your Groups".bold());
                for card in groups {
                    group_card(card);
                }
            }
            if !pending.is_empty() {
                if !groups.is_empty() {
                    println!();
                }
                println!("{}", "Waiting for a Group".bold());
                for card in pending {
                    pending_card(card);
                }
            }
        }
    }
}

fn group_card(card: &GroupCard) {
    println!(
        "  {} {}  {}",
        card.title.green().bold(),
        format!("({})", card.badge).dimmed(),
        card.match_id.dimmed()
    );
    println!("    {}", stats_line(&card.stats));
}

fn pending_card(card: &PendingCard) {
    println!(
        "  {} {}",
        card.course.yellow().bold(),
        format!("({})", card.badge).dimmed()
    );
    println!("    {} {}%", progress_bar(card.bar_pct), card.progress_pct);
    let status = if card.status == READY_STATUS {
        card.status.green()
    } else {
        card.status.normal()
    };
    println!("    {status}");
    println!(
        "    Study: {}  Location: {}",
        card.study_preference, card.location_preference
    );
}

pub fn group_detail(view: &GroupDetailView) {
    println!("{}", view.title.bold());
    println!("  {}", stats_line(&view.stats));
    println!();
    println!("{}", "Members".bold());
    for member in &view.members {
        member_line(member);
    }
}

/// Prints a student's group, leaving the student out of the member list.
pub fn student_match(group: &StudentMatch) {
    let student = &group.student;
    let course = student.course.as_deref().unwrap_or_default();
    println!("{}", format!("{course} Study Group").trim().bold());
    println!(
        "  {} {}",
        student.name.as_deref().unwrap_or(&student.id),
        format!("(match {})", group.match_id).dimmed()
    );
    let stats = MatchStats::from_ratios(
        group.availability_overlap,
        group.preference_alignment,
        group.avg_compatibility,
    );
    println!("  {}", stats_line(&stats));
    println!();
    println!("{}", "Your Group Members".bold());
    let members: Vec<MemberLine> = group.others().map(MemberLine::from).collect();
    if members.is_empty() {
        println!("  No group members found.");
    }
    for member in &members {
        member_line(member);
    }
}

fn member_line(member: &MemberLine) {
    println!("  {} <{}>", member.name, member.email.cyan());
    let study = if member.study_preference.is_empty() {
        "-"
    } else {
        member.study_preference.as_str()
    };
    println!(
        "    Study: {study}  Location: {}",
        member.location_preference
    );
}

/// Prints the weekday grid with selected cells marked.
pub fn calendar(selection: &AvailabilitySelection) {
    print!("{:>10}", "");
    for day in CalendarGrid::days() {
        print!(" {:^10}", &day[..3]);
    }
    println!();
    for row in CalendarGrid::rows(selection) {
        print!("{:>10}", row.time_range);
        for cell in &row.cells {
            let mark = if cell.selected {
                format!("{:^10}", "x").green().bold()
            } else {
                format!("{:^10}", ".").dimmed()
            };
            print!(" {mark}");
        }
        println!();
    }
}

/// Lists half-day slots with their labels.
pub fn preference_slots(slots: &[PreferenceSlot]) {
    for slot in slots {
        println!("  {} {}", slot.as_str().green(), slot.label().dimmed());
    }
}

fn stats_line(stats: &MatchStats) -> String {
    format!(
        "Availability {}%  Preferences {}%  Overall {}%",
        stats.availability_pct, stats.preference_pct, stats.overall_pct
    )
}

fn progress_bar(pct: usize) -> String {
    let filled = pct.min(100) * BAR_WIDTH / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled).green(),
        "-".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_is_clamped() {
        colored::control::set_override(false);
        assert_eq!(progress_bar(0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(133), format!("[{}]", "#".repeat(BAR_WIDTH)));
    }
}
