//! # Role Gate
//!
//! The login state machine selecting the admin or operator capability set.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                                                                 │
//! │   Unauthenticated ──select_role(1|2)──► Pending(role)           │
//! │        ▲  ▲                                 │                   │
//! │        │  │                          verify(password)           │
//! │        │  │                          │              │           │
//! │        │  └───────── wrong ──────────┘           correct        │
//! │        │                                            ▼           │
//! │        └────────────── sign_out ──────── Authenticated(role)    │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## This Is a Toy Gate
//! The passwords are build-time constants. There is no hashing, no
//! lockout, no rate limiting, and no timeout, deliberately. Do not
//! harden this; it selects a menu, it does not protect anything.

use crate::error::{CoreError, CoreResult};
use crate::types::Role;

/// Password for the admin role.
pub const ADMIN_PASSWORD: u32 = 1234;

/// Password for the counter operator role.
pub const OPERATOR_PASSWORD: u32 = 5678;

/// Result of a [`RoleGate::verify`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Password matched the pending role; the gate is now open.
    Authenticated(Role),
    /// Wrong password, or no role was pending. The gate has reset.
    Rejected,
}

/// Internal gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Unauthenticated,
    Pending(Role),
    Authenticated(Role),
}

/// The role gate: one per session, reset on failed login or sign-out.
#[derive(Debug, Clone)]
pub struct RoleGate {
    state: GateState,
}

impl RoleGate {
    /// Creates a gate in the unauthenticated state.
    pub fn new() -> Self {
        RoleGate {
            state: GateState::Unauthenticated,
        }
    }

    /// Stages a role for verification: `1` = admin, `2` = operator.
    ///
    /// Any other choice is [`CoreError::InvalidRoleChoice`] and leaves the
    /// gate unauthenticated.
    pub fn select_role(&mut self, choice: u32) -> CoreResult<Role> {
        let role = match choice {
            1 => Role::Admin,
            2 => Role::Operator,
            other => {
                self.state = GateState::Unauthenticated;
                return Err(CoreError::InvalidRoleChoice(other));
            }
        };
        self.state = GateState::Pending(role);
        Ok(role)
    }

    /// Checks `password` against the pending role's constant.
    ///
    /// A wrong password (or a verify with no pending role) rejects and
    /// resets the gate to unauthenticated.
    pub fn verify(&mut self, password: u32) -> LoginOutcome {
        let pending = match self.state {
            GateState::Pending(role) => role,
            _ => {
                self.state = GateState::Unauthenticated;
                return LoginOutcome::Rejected;
            }
        };

        let expected = match pending {
            Role::Admin => ADMIN_PASSWORD,
            Role::Operator => OPERATOR_PASSWORD,
        };

        if password == expected {
            self.state = GateState::Authenticated(pending);
            LoginOutcome::Authenticated(pending)
        } else {
            self.state = GateState::Unauthenticated;
            LoginOutcome::Rejected
        }
    }

    /// Returns to the unauthenticated state (the menu "exit" option).
    pub fn sign_out(&mut self) {
        self.state = GateState::Unauthenticated;
    }

    /// The authenticated role, if the gate is open.
    pub fn current(&self) -> Option<Role> {
        match self.state {
            GateState::Authenticated(role) => Some(role),
            _ => None,
        }
    }
}

impl Default for RoleGate {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_login_happy_path() {
        let mut gate = RoleGate::new();
        assert_eq!(gate.select_role(1).unwrap(), Role::Admin);
        assert_eq!(gate.verify(ADMIN_PASSWORD), LoginOutcome::Authenticated(Role::Admin));
        assert_eq!(gate.current(), Some(Role::Admin));
    }

    #[test]
    fn test_operator_login_happy_path() {
        let mut gate = RoleGate::new();
        gate.select_role(2).unwrap();
        assert_eq!(
            gate.verify(OPERATOR_PASSWORD),
            LoginOutcome::Authenticated(Role::Operator)
        );
        assert_eq!(gate.current(), Some(Role::Operator));
    }

    /// A wrong password rejects AND resets the gate.
    #[test]
    fn test_wrong_password_rejects_and_resets() {
        let mut gate = RoleGate::new();
        gate.select_role(1).unwrap();

        assert_eq!(gate.verify(9999), LoginOutcome::Rejected);
        assert_eq!(gate.current(), None);

        // The pending role did not survive the failure: a bare retry with
        // the right password is still rejected.
        assert_eq!(gate.verify(ADMIN_PASSWORD), LoginOutcome::Rejected);
    }

    #[test]
    fn test_crossed_passwords_reject() {
        // Operator password against a pending admin role, and vice versa.
        let mut gate = RoleGate::new();
        gate.select_role(1).unwrap();
        assert_eq!(gate.verify(OPERATOR_PASSWORD), LoginOutcome::Rejected);

        gate.select_role(2).unwrap();
        assert_eq!(gate.verify(ADMIN_PASSWORD), LoginOutcome::Rejected);
    }

    #[test]
    fn test_invalid_role_choice() {
        let mut gate = RoleGate::new();
        let err = gate.select_role(3).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRoleChoice(3)));
        assert_eq!(gate.current(), None);
    }

    #[test]
    fn test_sign_out_returns_to_unauthenticated() {
        let mut gate = RoleGate::new();
        gate.select_role(2).unwrap();
        gate.verify(OPERATOR_PASSWORD);
        assert!(gate.current().is_some());

        gate.sign_out();
        assert_eq!(gate.current(), None);
    }
}
