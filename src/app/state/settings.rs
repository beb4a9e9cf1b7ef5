/// Settings rows in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    AutoRetrain,
    SimilarityThreshold,
    EmailNotifications,
    PushNotifications,
    WeeklyReports,
    ApiCredentials,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 6] = [
        SettingsRow::AutoRetrain,
        SettingsRow::SimilarityThreshold,
        SettingsRow::EmailNotifications,
        SettingsRow::PushNotifications,
        SettingsRow::WeeklyReports,
        SettingsRow::ApiCredentials,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SettingsRow::AutoRetrain => "Auto-retrain Weekly",
            SettingsRow::SimilarityThreshold => "Similarity Threshold",
            SettingsRow::EmailNotifications => "Email Notifications",
            SettingsRow::PushNotifications => "Push Notifications",
            SettingsRow::WeeklyReports => "Weekly Reports",
            SettingsRow::ApiCredentials => "API Credentials",
        }
    }
}

const THRESHOLD_MIN: u8 = 1;
const THRESHOLD_MAX: u8 = 10;

/// In-memory settings. Nothing here is written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsState {
    pub auto_retrain: bool,
    threshold_tenths: u8,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_reports: bool,
    pub selected: usize,
    pub api_modal_open: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            auto_retrain: true,
            threshold_tenths: 8,
            email_notifications: true,
            push_notifications: false,
            weekly_reports: true,
            selected: 0,
            api_modal_open: false,
        }
    }
}

impl SettingsState {
    #[must_use]
    pub fn selected_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.selected.min(SettingsRow::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SettingsRow::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(SettingsRow::ALL.len() - 1);
    }

    #[must_use]
    pub fn similarity_threshold(&self) -> f32 {
        f32::from(self.threshold_tenths) / 10.0
    }

    pub fn raise_threshold(&mut self) {
        self.threshold_tenths = (self.threshold_tenths + 1).min(THRESHOLD_MAX);
    }

    pub fn lower_threshold(&mut self) {
        self.threshold_tenths = self.threshold_tenths.saturating_sub(1).max(THRESHOLD_MIN);
    }

    #[must_use]
    pub fn toggle_value(&self, row: SettingsRow) -> Option<bool> {
        match row {
            SettingsRow::AutoRetrain => Some(self.auto_retrain),
            SettingsRow::EmailNotifications => Some(self.email_notifications),
            SettingsRow::PushNotifications => Some(self.push_notifications),
            SettingsRow::WeeklyReports => Some(self.weekly_reports),
            SettingsRow::SimilarityThreshold | SettingsRow::ApiCredentials => None,
        }
    }

    /// Flips a toggle row and returns its new value. Other rows return `None`.
    pub fn toggle(&mut self, row: SettingsRow) -> Option<bool> {
        let flag = match row {
            SettingsRow::AutoRetrain => &mut self.auto_retrain,
            SettingsRow::EmailNotifications => &mut self.email_notifications,
            SettingsRow::PushNotifications => &mut self.push_notifications,
            SettingsRow::WeeklyReports => &mut self.weekly_reports,
            SettingsRow::SimilarityThreshold | SettingsRow::ApiCredentials => return None,
        };
        *flag = !*flag;
        Some(*flag)
    }
}
