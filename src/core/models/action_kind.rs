/// Audited actions that have a dedicated summary template.
///
/// Anything else lands in `Other` and is rendered with the generic
/// `log_action_<CODE>` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    RoleChanged,
    PermissionAdded,
    PermissionRemoved,
    SettingChanged,
    UserCreated,
    LoginSucceeded,
    Other(String),
}

/// How a detail field is turned into the highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Field value shown as-is.
    Verbatim,
    /// `read:users` → lookup `perm_read_users`.
    Permission,
    /// `editor` → lookup `role_editor`.
    Role,
}

/// Binds a `{placeholder}` in a summary template to a detail field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderRule {
    pub placeholder: &'static str,
    pub field: &'static str,
    pub transform: Transform,
}

const fn rule(placeholder: &'static str, field: &'static str, transform: Transform) -> PlaceholderRule {
    PlaceholderRule {
        placeholder,
        field,
        transform,
    }
}

const PERMISSION_RULES: &[PlaceholderRule] = &[
    rule("permission_action", "permission_action", Transform::Permission),
    rule("role_name", "role_name", Transform::Role),
];

/// Action code → kind → placeholder rules.
///
/// Adding an audited action with a templated summary is one entry here.
static ACTION_TABLE: [(&str, ActionKind, &[PlaceholderRule]); 6] = [
    (
        "USER_ROLE_CHANGED",
        ActionKind::RoleChanged,
        &[rule("email", "target_user_email", Transform::Verbatim)],
    ),
    ("ROLE_PERMISSION_ADDED", ActionKind::PermissionAdded, PERMISSION_RULES),
    ("ROLE_PERMISSION_REMOVED", ActionKind::PermissionRemoved, PERMISSION_RULES),
    (
        "APP_SETTING_CHANGED",
        ActionKind::SettingChanged,
        &[rule("setting_key", "setting_key", Transform::Verbatim)],
    ),
    (
        "USER_CREATED",
        ActionKind::UserCreated,
        &[rule("email", "email", Transform::Verbatim)],
    ),
    (
        "USER_LOGIN_SUCCESS",
        ActionKind::LoginSucceeded,
        &[rule("email", "email", Transform::Verbatim)],
    ),
];

impl ActionKind {
    /// Classify a raw action code. Never fails.
    pub fn parse(code: &str) -> Self {
        ACTION_TABLE
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|(_, kind, _)| kind.clone())
            .unwrap_or_else(|| ActionKind::Other(code.to_string()))
    }

    /// The action code as stored in the log.
    pub fn code(&self) -> &str {
        match self {
            ActionKind::Other(code) => code,
            known => ACTION_TABLE
                .iter()
                .find(|(_, kind, _)| kind == known)
                .map(|(code, _, _)| *code)
                .unwrap_or_default(),
        }
    }

    /// Placeholder rules for the summary template; empty for `Other`.
    pub fn placeholders(&self) -> &'static [PlaceholderRule] {
        match self {
            ActionKind::Other(_) => &[],
            known => ACTION_TABLE
                .iter()
                .find(|(_, kind, _)| kind == known)
                .map(|(_, _, rules)| *rules)
                .unwrap_or_default(),
        }
    }

    /// Whether this action has a dedicated summary template.
    pub fn is_templated(&self) -> bool {
        !matches!(self, ActionKind::Other(_))
    }
}

/// Visual category of an action badge, derived from the action code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTone {
    Positive,
    Negative,
    Change,
    Access,
    Neutral,
}

impl ActionTone {
    /// First match wins: additions, removals, changes, then logins.
    pub fn classify(action: &str) -> Self {
        if action.contains("ADD") || action.contains("CREATE") {
            ActionTone::Positive
        } else if action.contains("REMOVE") || action.contains("DELETE") {
            ActionTone::Negative
        } else if action.contains("CHANGE") || action.contains("UPDATE") {
            ActionTone::Change
        } else if action.contains("LOGIN") {
            ActionTone::Access
        } else {
            ActionTone::Neutral
        }
    }
}
