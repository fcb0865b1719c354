//! Error and notice display component.

use dioxus::prelude::*;

/// How a message is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    /// Something failed and the dashboard cannot show data.
    #[default]
    Error,
    /// A diagnostic; the dashboard keeps working.
    Notice,
}

impl Severity {
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Error => "Error: ",
            Severity::Notice => "Note: ",
        }
    }

    pub fn role(self) -> &'static str {
        match self {
            Severity::Error => "alert",
            Severity::Notice => "status",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Severity::Error => "padding: 12px 16px; margin: 8px 0; background: #FEF2F2; color: #B91C1C; border-radius: 6px; border: 1px solid #FCA5A5;",
            Severity::Notice => "padding: 12px 16px; margin: 8px 0; background: #EFF6FF; color: #1E3A8A; border-radius: 6px; border: 1px solid #BFDBFE;",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default)]
    pub severity: Severity,
}

/// Displays an error or a notice in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: props.severity.role(),
            style: props.severity.style(),
            strong { {props.severity.prefix()} }
            "{props.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_do_not_read_as_errors() {
        assert_eq!(Severity::default(), Severity::Error);
        assert_eq!(Severity::Error.prefix(), "Error: ");
        assert!(!Severity::Notice.prefix().contains("Error"));
        assert_ne!(Severity::Notice.style(), Severity::Error.style());
        assert_eq!(Severity::Notice.role(), "status");
    }
}
