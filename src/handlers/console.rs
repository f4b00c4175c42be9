use std::io::{self, BufRead, Write};

use crate::application::order_service::OrderService;
use crate::domain::errors::DomainError;
use crate::domain::input::{parse_positive_int, parse_selection};
use crate::domain::order::{normalize_order_id, Item, NewOrder, Order};
use crate::domain::ports::{OrderRepository, StoreKind};
use crate::errors::AppError;

use super::messages;
use super::report::render_report;

// ── Menu ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Fulfill,
    Quit,
}

impl MenuChoice {
    /// Blank input counts as quit. Returns `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "" | "4" => Some(MenuChoice::Quit),
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Fulfill),
            _ => None,
        }
    }
}

// ── Console ───────────────────────────────────────────────────────────────────

/// Line-oriented operator console over any reader/writer pair.
///
/// End of input behaves like a blank line, except at prompts where a blank
/// line would be asked again; there it abandons the current operation.
pub struct Console<R, W, Repo> {
    input: R,
    output: W,
    service: OrderService<Repo>,
}

impl<R: BufRead, W: Write, Repo: OrderRepository> Console<R, W, Repo> {
    pub fn new(input: R, output: W, service: OrderService<Repo>) -> Self {
        Self {
            input,
            output,
            service,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prints `prompt` and reads one trimmed line; `None` at end of input.
    ///
    /// A line that is not valid UTF-8 is rejected and the prompt repeated.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            match String::from_utf8(buf) {
                Ok(line) => return Ok(Some(line.trim().to_string())),
                Err(e) => {
                    log::debug!("Rejected non-UTF-8 input: {e}");
                    self.say(messages::UNREADABLE_INPUT)?;
                }
            }
        }
    }

    fn report_failure(&mut self, err: DomainError) -> Result<(), AppError> {
        log::debug!("Operation failed: {err}");
        let text = match &err {
            DomainError::EmptyOrderId => messages::EMPTY_ORDER_ID.to_string(),
            DomainError::DuplicateOrderId(id) => messages::duplicate_order_id(id),
            DomainError::NoItems => messages::NO_ITEMS.to_string(),
            DomainError::InvalidNumber(_) => messages::INVALID_SELECTION.to_string(),
            DomainError::IndexOutOfRange { .. } => messages::SELECTION_OUT_OF_RANGE.to_string(),
            DomainError::CorruptStore { path, detail } => messages::corrupt_store(path, detail),
            DomainError::Storage(detail) => messages::storage_failure(detail),
        };
        self.say(&text)?;
        Ok(())
    }

    /// Runs the menu until the operator quits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            for line in [
                messages::MENU_HEADER,
                messages::MENU_ADD,
                messages::MENU_LIST,
                messages::MENU_FULFILL,
                messages::MENU_QUIT,
                messages::MENU_FOOTER,
            ] {
                self.say(line)?;
            }
            let choice = self.ask(messages::MENU_PROMPT)?.unwrap_or_default();

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add_order()?,
                Some(MenuChoice::List) => self.list_orders()?,
                Some(MenuChoice::Fulfill) => self.fulfill_order()?,
                Some(MenuChoice::Quit) => {
                    self.say(messages::GOODBYE)?;
                    return Ok(());
                }
                None => self.say(messages::MENU_INVALID)?,
            }
        }
    }

    // ── Add ───────────────────────────────────────────────────────────────────

    pub fn add_order(&mut self) -> Result<(), AppError> {
        let pending = match self.service.pending_orders() {
            Ok(pending) => pending,
            Err(e) => return self.report_failure(e),
        };

        let Some(order_id) = self.read_order_id(&pending)? else {
            return Ok(());
        };
        let customer = self.ask(messages::PROMPT_CUSTOMER)?.unwrap_or_default();

        let mut items = Vec::new();
        loop {
            let name = self.ask(messages::PROMPT_ITEM_NAME)?.unwrap_or_default();
            if name.is_empty() {
                break;
            }
            let Some(price) =
                self.read_positive_int(messages::PROMPT_PRICE, messages::INVALID_PRICE)?
            else {
                return Ok(());
            };
            let Some(quantity) =
                self.read_positive_int(messages::PROMPT_QUANTITY, messages::INVALID_QUANTITY)?
            else {
                return Ok(());
            };
            items.push(Item::new(name, price, quantity));
        }

        if items.is_empty() {
            self.say(messages::NO_ITEMS)?;
            return Ok(());
        }

        let new_order = NewOrder {
            order_id,
            customer,
            items,
        };
        match self.service.add_order(new_order) {
            Ok(order) => {
                let location = self.service.repository().location(StoreKind::Pending);
                self.say(&messages::order_added(&order.order_id, &location))?;
                Ok(())
            }
            Err(e) => self.report_failure(e),
        }
    }

    /// Asks until a non-blank id that is not already pending is entered.
    fn read_order_id(&mut self, pending: &[Order]) -> Result<Option<String>, AppError> {
        loop {
            let Some(raw) = self.ask(messages::PROMPT_ORDER_ID)? else {
                return Ok(None);
            };
            let Some(order_id) = normalize_order_id(&raw) else {
                self.say(messages::EMPTY_ORDER_ID)?;
                continue;
            };
            if pending.iter().any(|o| o.order_id == order_id) {
                self.say(&messages::duplicate_order_id(&order_id))?;
                continue;
            }
            return Ok(Some(order_id));
        }
    }

    fn read_positive_int(&mut self, prompt: &str, invalid: &str) -> Result<Option<u64>, AppError> {
        loop {
            let Some(raw) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_positive_int(&raw) {
                Ok(n) => return Ok(Some(n)),
                Err(_) => self.say(invalid)?,
            }
        }
    }

    // ── List ──────────────────────────────────────────────────────────────────

    pub fn list_orders(&mut self) -> Result<(), AppError> {
        let pending = match self.service.pending_orders() {
            Ok(pending) => pending,
            Err(e) => return self.report_failure(e),
        };

        if pending.is_empty() {
            self.say(messages::NO_PENDING)?;
        } else {
            self.say(messages::REPORT_HEADING)?;
            write!(self.output, "{}", render_report(&pending))?;
        }
        Ok(())
    }

    // ── Fulfill ───────────────────────────────────────────────────────────────

    pub fn fulfill_order(&mut self) -> Result<(), AppError> {
        let pending = match self.service.pending_orders() {
            Ok(pending) => pending,
            Err(e) => return self.report_failure(e),
        };
        if pending.is_empty() {
            self.say(messages::NO_PENDING)?;
            return Ok(());
        }

        self.say(messages::FULFILL_HEADING)?;
        for (i, order) in pending.iter().enumerate() {
            self.say(&messages::pending_summary(
                i + 1,
                &order.order_id,
                &order.customer,
            ))?;
        }

        let position = loop {
            let choice = self.ask(messages::PROMPT_SELECTION)?.unwrap_or_default();
            if choice.is_empty() {
                self.say(messages::FULFILL_CANCELLED)?;
                return Ok(());
            }
            match parse_selection(&choice, pending.len()) {
                Ok(position) => break position,
                Err(DomainError::IndexOutOfRange { .. }) => {
                    self.say(messages::SELECTION_OUT_OF_RANGE)?
                }
                Err(_) => self.say(messages::INVALID_SELECTION)?,
            }
        };

        match self.service.fulfill_order(position) {
            Ok(order) => {
                self.say(messages::FULFILLED)?;
                write!(
                    self.output,
                    "{}",
                    render_report(std::slice::from_ref(&order))
                )?;
                Ok(())
            }
            Err(e) => self.report_failure(e),
        }
    }
}
