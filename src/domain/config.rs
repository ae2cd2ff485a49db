// ============================================================================
// Calculator Configuration
// Operand bounds and session behavior
// ============================================================================

use crate::numeral::{MAX_VALUE, MIN_VALUE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Error Policy
// ============================================================================

/// What an interactive session does after reporting an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorPolicy {
    /// Stop the session after the first failed expression
    #[default]
    Halt,

    /// Report the error and read the next expression
    Continue,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Smallest accepted operand (inclusive)
    pub operand_min: i64,

    /// Largest accepted operand (inclusive)
    pub operand_max: i64,

    /// Behavior after a failed expression
    pub error_policy: ErrorPolicy,

    /// Input line that ends the session
    pub exit_command: String,

    /// Print the usage banner when the session starts
    pub show_banner: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            operand_min: 1,
            operand_max: 10,
            error_policy: ErrorPolicy::Halt,
            exit_command: "exit".to_string(),
            show_banner: true,
        }
    }
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set accepted operand range
    pub fn with_operand_range(mut self, min: i64, max: i64) -> Self {
        self.operand_min = min;
        self.operand_max = max;
        self
    }

    /// Builder method: Set error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Builder method: Set exit command
    pub fn with_exit_command(mut self, command: impl Into<String>) -> Self {
        self.exit_command = command.into();
        self
    }

    /// Builder method: Enable or disable the banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.exit_command.trim().is_empty() {
            return Err("Exit command cannot be empty".to_string());
        }

        if self.operand_min < MIN_VALUE {
            return Err(format!("Operand minimum must be at least {}", MIN_VALUE));
        }

        // Roman operands must stay encodable
        if self.operand_max > MAX_VALUE {
            return Err(format!("Operand maximum cannot exceed {}", MAX_VALUE));
        }

        if self.operand_min > self.operand_max {
            return Err("Operand minimum cannot exceed operand maximum".to_string());
        }

        Ok(())
    }

    /// Whether `value` is an accepted operand
    #[inline]
    pub fn accepts_operand(&self, value: i64) -> bool {
        (self.operand_min..=self.operand_max).contains(&value)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Classic configuration
    /// - Operands in [1, 10]
    /// - Session halts on the first error
    pub fn classic() -> Self {
        Self::default()
    }

    /// Forgiving configuration
    /// - Operands in [1, 10]
    /// - Errors are reported and the session continues
    pub fn forgiving() -> Self {
        Self::default().with_error_policy(ErrorPolicy::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CalculatorConfig::new();

        assert_eq!(config.operand_min, 1);
        assert_eq!(config.operand_max, 10);
        assert_eq!(config.error_policy, ErrorPolicy::Halt);
        assert_eq!(config.exit_command, "exit");
        assert!(config.show_banner);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::new()
            .with_operand_range(1, 100)
            .with_exit_command("quit")
            .with_banner(false);

        assert_eq!(config.operand_max, 100);
        assert_eq!(config.exit_command, "quit");
        assert!(!config.show_banner);
        assert!(config.accepts_operand(100));
        assert!(!config.accepts_operand(101));
    }

    #[test]
    fn test_validation() {
        assert!(CalculatorConfig::new()
            .with_exit_command("  ")
            .validate()
            .is_err());
        assert!(CalculatorConfig::new()
            .with_operand_range(0, 10)
            .validate()
            .is_err());
        assert!(CalculatorConfig::new()
            .with_operand_range(1, 4000)
            .validate()
            .is_err());
        assert!(CalculatorConfig::new()
            .with_operand_range(8, 3)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(CalculatorConfig::classic().error_policy, ErrorPolicy::Halt);
        assert_eq!(
            CalculatorConfig::forgiving().error_policy,
            ErrorPolicy::Continue
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = CalculatorConfig::forgiving();
        let json = serde_json::to_string(&config).unwrap();
        let back: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
