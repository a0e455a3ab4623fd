//! # Session
//!
//! The interactive session: role gate, then the admin or operator menu,
//! until exit or end of input.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                                                                 │
//! │   role menu ──1/password──► admin menu ──► catalog mutations    │
//! │      ▲ ▲                        │                               │
//! │      │ └──────── exit ──────────┘                               │
//! │      │                                                          │
//! │      ├────2/password──► operator menu ──► bill mutations        │
//! │      │                        │          (catalog lookups)      │
//! │      └──────── exit ──────────┘                                 │
//! │                                                                 │
//! │   Bad input anywhere: message, abandon sub-operation, re-show   │
//! │   the enclosing menu. End of input: session ends cleanly.       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Ownership
//! The session owns the one `Catalog`, the one `Bill`, and the gate.
//! The catalog is passed by reference into both paths; the bill survives
//! operator logouts and dies with the process. No statics, no locks:
//! there is exactly one caller.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tally_core::{validation, Bill, Catalog, LoginOutcome, Money, Role, RoleGate};

use crate::config::TerminalConfig;
use crate::error::InputError;
use crate::input;
use crate::menu::{AdminCommand, OperatorCommand};
use crate::render;

/// Whether a menu round keeps the current menu or leaves it.
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a pair of I/O handles.
pub struct Session<R, W> {
    config: TerminalConfig,
    catalog: Catalog,
    bill: Bill,
    gate: RoleGate,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty catalog and bill.
    pub fn new(config: TerminalConfig, input: R, output: W) -> Self {
        Session {
            config,
            catalog: Catalog::new(),
            bill: Bill::new(),
            gate: RoleGate::new(),
            input,
            output,
        }
    }

    /// Runs the session until the input stream ends.
    ///
    /// End of input is the clean way out; read/parse failures never
    /// escape their menu.
    pub fn run(&mut self) -> Result<(), InputError> {
        render::banner(&mut self.output, &self.config)?;
        match self.login_loop() {
            Err(InputError::Eof) => Ok(()),
            other => other,
        }
    }

    // =========================================================================
    // Role Gate Loop
    // =========================================================================

    fn login_loop(&mut self) -> Result<(), InputError> {
        loop {
            render::role_menu(&mut self.output)?;
            match self.login_round() {
                Ok(Some(Role::Admin)) => self.admin_loop()?,
                Ok(Some(Role::Operator)) => self.operator_loop()?,
                // Failed login or bad role choice: message already printed.
                Ok(None) => {}
                Err(err @ InputError::NotANumber) => writeln!(self.output, "{err}")?,
                Err(err) => return Err(err),
            }
        }
    }

    fn login_round(&mut self) -> Result<Option<Role>, InputError> {
        let choice = input::read_u32(&mut self.input)?;
        let role = match self.gate.select_role(choice) {
            Ok(role) => role,
            Err(err) => {
                warn!(choice, "invalid role choice");
                writeln!(self.output, "{err}")?;
                return Ok(None);
            }
        };

        let password =
            input::prompt_u32(&mut self.input, &mut self.output, "Please enter your password:")?;
        match self.gate.verify(password) {
            LoginOutcome::Authenticated(role) => {
                info!(%role, "login accepted");
                writeln!(self.output, "Successfully logged in!")?;
                Ok(Some(role))
            }
            LoginOutcome::Rejected => {
                warn!(%role, "login rejected");
                writeln!(self.output, "Failed to log in!")?;
                Ok(None)
            }
        }
    }

    // =========================================================================
    // Admin Menu
    // =========================================================================

    fn admin_loop(&mut self) -> Result<(), InputError> {
        loop {
            render::admin_menu(&mut self.output)?;
            match self.admin_round() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.gate.sign_out();
                    info!("admin signed out");
                    return Ok(());
                }
                Err(err @ (InputError::NotANumber | InputError::UnknownOption(_))) => {
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn admin_round(&mut self) -> Result<Flow, InputError> {
        let command = AdminCommand::try_from(input::read_u32(&mut self.input)?)?;
        debug!(?command, "admin command");

        match command {
            AdminCommand::AddProduct => self.add_product()?,
            AdminCommand::RemoveProduct => self.remove_product()?,
            AdminCommand::ClearProducts => {
                self.catalog.clear();
                info!("catalog cleared");
                writeln!(self.output, "Deleted all the products!")?;
            }
            AdminCommand::ListProducts => {
                render::product_table(&mut self.output, &self.catalog, &self.config)?;
            }
            AdminCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn add_product(&mut self) -> Result<(), InputError> {
        let raw_name =
            input::prompt_line(&mut self.input, &mut self.output, "Enter the product name:")?;
        let name = match validation::validate_product_name(&raw_name) {
            Ok(name) => name,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };

        let id = input::prompt_u32(&mut self.input, &mut self.output, "Enter the product id:")?;
        let price = Money::from_cents(input::prompt_i64(
            &mut self.input,
            &mut self.output,
            "Enter the price (in cents):",
        )?);
        if let Err(err) = validation::validate_price(price) {
            writeln!(self.output, "{err}")?;
            return Ok(());
        }

        match self.catalog.upsert(id, name.clone(), price) {
            None => {
                info!(id, name = %name, "product added");
                writeln!(self.output, "Product {name} added with ID {id}")?;
            }
            Some(_previous) => {
                info!(id, name = %name, "product updated");
                writeln!(self.output, "Product {name} updated with ID {id}")?;
            }
        }
        Ok(())
    }

    fn remove_product(&mut self) -> Result<(), InputError> {
        let id = input::prompt_u32(&mut self.input, &mut self.output, "Enter the product id:")?;
        match self.catalog.remove(id) {
            Ok(product) => {
                info!(id, name = %product.name, "product removed");
                writeln!(self.output, "Deleted product with ID {id} ({})", product.name)?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    // =========================================================================
    // Operator Menu
    // =========================================================================

    fn operator_loop(&mut self) -> Result<(), InputError> {
        loop {
            render::operator_menu(&mut self.output)?;
            match self.operator_round() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.gate.sign_out();
                    info!("operator signed out");
                    return Ok(());
                }
                Err(err @ (InputError::NotANumber | InputError::UnknownOption(_))) => {
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn operator_round(&mut self) -> Result<Flow, InputError> {
        let command = OperatorCommand::try_from(input::read_u32(&mut self.input)?)?;
        debug!(?command, "operator command");

        match command {
            OperatorCommand::AddItem => self.add_item()?,
            OperatorCommand::ModifyItem => self.modify_item()?,
            OperatorCommand::RemoveItem => self.remove_item()?,
            OperatorCommand::ShowTotal => {
                let total = self.config.format_money(self.bill.total());
                writeln!(self.output, "Bill amount: {total}")?;
            }
            OperatorCommand::GenerateBill => {
                let receipt = self.bill.receipt();
                info!(receipt_id = %receipt.id, lines = receipt.lines.len(), "receipt generated");
                render::receipt(&mut self.output, &receipt, &self.config)?;
            }
            OperatorCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn add_item(&mut self) -> Result<(), InputError> {
        let id = input::prompt_u32(&mut self.input, &mut self.output, "Enter the product id:")?;
        let Some(product) = self.catalog.get(id) else {
            writeln!(self.output, "Item not found in store!")?;
            return Ok(());
        };
        // One line per product id on the bill; duplicates go through
        // modify instead.
        if self.bill.contains(id) {
            writeln!(self.output, "Item is already on the bill; modify it instead.")?;
            return Ok(());
        }

        let quantity =
            input::prompt_i64(&mut self.input, &mut self.output, "Enter the quantity:")?;
        if let Err(err) = validation::validate_quantity(quantity) {
            writeln!(self.output, "{err}")?;
            return Ok(());
        }

        let line = self.bill.add_line(product, quantity);
        debug!(id, quantity, "line added");
        writeln!(self.output, "Added item:")?;
        render::line_item(&mut self.output, line, &self.config)?;
        Ok(())
    }

    fn modify_item(&mut self) -> Result<(), InputError> {
        let id = input::prompt_u32(&mut self.input, &mut self.output, "Enter the product id:")?;
        let Some(product) = self.catalog.get(id) else {
            writeln!(self.output, "Item not found in store!")?;
            return Ok(());
        };
        if !self.bill.contains(id) {
            writeln!(self.output, "Item not found in bill!")?;
            return Ok(());
        }

        let quantity =
            input::prompt_i64(&mut self.input, &mut self.output, "Enter the new quantity:")?;
        if let Err(err) = validation::validate_quantity(quantity) {
            writeln!(self.output, "{err}")?;
            return Ok(());
        }

        match self.bill.modify_line(product, quantity) {
            Ok(line) => {
                debug!(id, quantity, "line modified");
                writeln!(self.output, "Modified item:")?;
                render::line_item(&mut self.output, line, &self.config)?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn remove_item(&mut self) -> Result<(), InputError> {
        let id = input::prompt_u32(&mut self.input, &mut self.output, "Enter the product id:")?;
        // The store check is only a warning here: removal works off the
        // bill, and the admin may have delisted the product meanwhile.
        if !self.catalog.exists(id) {
            writeln!(self.output, "Item not found in store!")?;
        }
        match self.bill.remove_line(id) {
            Ok(line) => {
                debug!(id, "line removed");
                writeln!(self.output, "Product ID {id} has been removed ({})", line.name)?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
