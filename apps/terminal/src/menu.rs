//! # Menu Commands
//!
//! Typed command enums for the two menus. The numeric codes the user
//! types are parsed into these ONCE, at the menu boundary; everything
//! past this point dispatches on the enum, never on raw input.
//!
//! The code assignments are stable (admin 1-5, operator 1-6); cashier
//! muscle memory depends on them, so renumbering is a breaking change.

use crate::error::InputError;

/// Operations available to the administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand {
    /// 1) Add (or re-price) a product
    AddProduct,
    /// 2) Remove a product
    RemoveProduct,
    /// 3) Clear the whole catalog
    ClearProducts,
    /// 4) Show the product table
    ListProducts,
    /// 5) Back to the role menu
    Exit,
}

impl TryFrom<u32> for AdminCommand {
    type Error = InputError;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(AdminCommand::AddProduct),
            2 => Ok(AdminCommand::RemoveProduct),
            3 => Ok(AdminCommand::ClearProducts),
            4 => Ok(AdminCommand::ListProducts),
            5 => Ok(AdminCommand::Exit),
            other => Err(InputError::UnknownOption(other)),
        }
    }
}

/// Operations available to the counter operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorCommand {
    /// 1) Add an item to the bill
    AddItem,
    /// 2) Re-quantify an item on the bill
    ModifyItem,
    /// 3) Remove an item from the bill
    RemoveItem,
    /// 4) Show the running total
    ShowTotal,
    /// 5) Render the full bill
    GenerateBill,
    /// 6) Back to the role menu
    Exit,
}

impl TryFrom<u32> for OperatorCommand {
    type Error = InputError;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(OperatorCommand::AddItem),
            2 => Ok(OperatorCommand::ModifyItem),
            3 => Ok(OperatorCommand::RemoveItem),
            4 => Ok(OperatorCommand::ShowTotal),
            5 => Ok(OperatorCommand::GenerateBill),
            6 => Ok(OperatorCommand::Exit),
            other => Err(InputError::UnknownOption(other)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_codes() {
        assert_eq!(AdminCommand::try_from(1).unwrap(), AdminCommand::AddProduct);
        assert_eq!(AdminCommand::try_from(2).unwrap(), AdminCommand::RemoveProduct);
        assert_eq!(AdminCommand::try_from(3).unwrap(), AdminCommand::ClearProducts);
        assert_eq!(AdminCommand::try_from(4).unwrap(), AdminCommand::ListProducts);
        assert_eq!(AdminCommand::try_from(5).unwrap(), AdminCommand::Exit);
    }

    #[test]
    fn test_operator_codes() {
        assert_eq!(OperatorCommand::try_from(1).unwrap(), OperatorCommand::AddItem);
        assert_eq!(OperatorCommand::try_from(5).unwrap(), OperatorCommand::GenerateBill);
        assert_eq!(OperatorCommand::try_from(6).unwrap(), OperatorCommand::Exit);
    }

    #[test]
    fn test_out_of_range_codes_are_rejected() {
        assert!(matches!(
            AdminCommand::try_from(0),
            Err(InputError::UnknownOption(0))
        ));
        assert!(matches!(
            AdminCommand::try_from(6),
            Err(InputError::UnknownOption(6))
        ));
        assert!(matches!(
            OperatorCommand::try_from(7),
            Err(InputError::UnknownOption(7))
        ));
    }
}
