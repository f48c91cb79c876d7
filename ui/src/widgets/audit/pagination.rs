use audit_business::AuditAction;
use audit_business::audit::PaginationDisplay;
use egui::{Button, Ui};

const PAGE_BUTTON_SPACING: f32 = 10.0;

/// Previous, one button per page (the current one highlighted), Next.
pub fn render_pagination(
    ui: &mut Ui,
    pagination: &PaginationDisplay,
    actions: &mut Vec<AuditAction>,
) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(pagination.previous_enabled, Button::new("Previous"))
            .clicked()
        {
            actions.push(AuditAction::PreviousPage);
        }

        ui.spacing_mut().item_spacing.x = PAGE_BUTTON_SPACING;
        for page in &pagination.pages {
            let button = Button::new(page.number.to_string()).selected(page.active);
            if ui.add(button).clicked() {
                actions.push(AuditAction::GoToPage(page.number));
            }
        }

        if ui
            .add_enabled(pagination.next_enabled, Button::new("Next"))
            .clicked()
        {
            actions.push(AuditAction::NextPage);
        }
    });
}
