//! The interactive command loop.

use std::io::{self, BufRead, Write};
use std::rc::Rc;

use stockroom_core::{DomainError, ItemId};
use stockroom_inventory::{InventoryConfig, InventoryStore, RecordingNotifier};

use crate::config::OutputFormat;
use crate::prompt::Prompter;
use crate::render::Renderer;

pub const BANNER: &str = "\n**** Welcome to the Inventory Management System ****\n";

pub const MENU: &str = "Commands: \n1.Add Item\n2.Update Item\n3.Delete Item Completely\n4.Delete Some quantity of an Item\n5.Display All Items\n6.Display Items Of Particular Category\n7.Topk Items\n8.Exit";

/// One entry of the numbered menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Update,
    Delete,
    DeleteQuantity,
    DisplayAll,
    DisplayCategory,
    TopK,
    Exit,
}

impl MenuCommand {
    pub fn from_number(n: u32) -> Option<Self> {
        Some(match n {
            1 => Self::Add,
            2 => Self::Update,
            3 => Self::Delete,
            4 => Self::DeleteQuantity,
            5 => Self::DisplayAll,
            6 => Self::DisplayCategory,
            7 => Self::TopK,
            8 => Self::Exit,
            _ => return None,
        })
    }
}

impl core::str::FromStr for MenuCommand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| DomainError::validation(format!("unknown command '{}'", s.trim())))
    }
}

/// Whether the loop should keep reading commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Owns the store for the lifetime of one interactive run.
pub struct Session<R, W> {
    store: InventoryStore,
    notices: Rc<RecordingNotifier>,
    prompter: Prompter<R, W>,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: InventoryConfig, format: OutputFormat, input: R, output: W) -> Self {
        let notices = Rc::new(RecordingNotifier::new());
        Self {
            store: InventoryStore::with_notifier(config, notices.clone()),
            notices,
            prompter: Prompter::new(input, output),
            renderer: Renderer::new(format),
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run until Exit or end of input. Only I/O failures are errors.
    pub fn run(&mut self) -> io::Result<()> {
        let out = self.prompter.output();
        writeln!(out, "{BANNER}")?;
        writeln!(out, "{MENU}")?;

        loop {
            let Some(answer) = self.prompter.ask("\nPlease Choose a Command: ")? else {
                tracing::info!("input closed, leaving command loop");
                return Ok(());
            };

            let command = match answer.parse::<MenuCommand>() {
                Ok(command) => command,
                Err(err) => {
                    tracing::debug!(%err, "rejected menu input");
                    writeln!(self.prompter.output(), "Invalid command. Try again.")?;
                    continue;
                }
            };

            if self.dispatch(command)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: MenuCommand) -> io::Result<Flow> {
        tracing::debug!(?command, "dispatching");
        match command {
            MenuCommand::Add => self.add(),
            MenuCommand::Update => self.update(),
            MenuCommand::Delete => self.delete(),
            MenuCommand::DeleteQuantity => self.delete_quantity(),
            MenuCommand::DisplayAll => self.display_all().map(|()| Flow::Continue),
            MenuCommand::DisplayCategory => self.display_category(),
            MenuCommand::TopK => self.top_k(),
            MenuCommand::Exit => {
                writeln!(self.prompter.output(), "Exiting Inventory Management System.")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompter.ask("Enter name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.prompter.ask("Enter category: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompter.ask_parsed::<u64>("Enter quantity: ")? else {
            return Ok(Flow::Exit);
        };
        self.store_item(name, category, quantity, None)?;
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompter.ask_parsed::<ItemId>("Enter ID to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.prompter.ask("Enter new name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.prompter.ask("Enter new category: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) = self.prompter.ask_parsed::<u64>("Enter new quantity: ")? else {
            return Ok(Flow::Exit);
        };
        self.store_item(name, category, quantity, Some(id))?;
        Ok(Flow::Continue)
    }

    fn store_item(&mut self, name: String, category: String, quantity: u64, id: Option<ItemId>) -> io::Result<()> {
        let replaced = id.map(|id| (id, self.store.get(id).is_some()));
        let result = self.store.add_or_update(name, category, quantity, id);
        let out = self.prompter.output();

        // An accepted update deletes under its id first and reports that delete.
        if let (Ok(_), Some((id, existed))) = (&result, replaced) {
            if existed {
                writeln!(out, "Item with ID {id} removed successfully.")?;
            } else {
                writeln!(out, "Item with ID {id} not found.")?;
            }
        }

        for item in self.notices.take() {
            writeln!(out, "Restock Notification: {item}")?;
        }

        match result {
            Ok(item) => {
                tracing::info!(item_id = %item.id, "item added or updated");
                writeln!(out, "Item added/updated successfully.")
            }
            Err(err) => writeln!(out, "Error: {err}"),
        }
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompter.ask_parsed::<ItemId>("Enter ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let out = self.prompter.output();
        match self.store.remove(id) {
            Some(_) => writeln!(out, "Item with ID {id} removed successfully.")?,
            None => writeln!(out, "Item with ID {id} not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn delete_quantity(&mut self) -> io::Result<Flow> {
        let Some(id) = self
            .prompter
            .ask_parsed::<ItemId>("Enter ID of the item to remove quantity from: ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.prompter.ask_parsed::<u64>("Enter quantity to remove: ")? else {
            return Ok(Flow::Exit);
        };

        let out = self.prompter.output();
        match self.store.remove_quantity(id, amount) {
            Ok(outcome) if outcome.removed => {
                writeln!(out, "Item with ID {id} removed successfully.")?;
                writeln!(out, "Item with ID {id} has been completely removed.")?;
            }
            Ok(outcome) => writeln!(
                out,
                "Quantity updated successfully. Remaining quantity: {}",
                outcome.remaining
            )?,
            Err(DomainError::NotFound { .. }) => writeln!(out, "Item with ID {id} not found.")?,
            Err(DomainError::InsufficientQuantity { .. }) => {
                writeln!(out, "Error: Cannot remove more quantity than available.")?
            }
            Err(err) => writeln!(out, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> io::Result<()> {
        let items = self.store.list_all();
        let out = self.prompter.output();
        if items.is_empty() {
            return self.renderer.empty(out, "Inventory is empty.");
        }
        self.renderer.listing(out, "All Items in Inventory:", &items)
    }

    fn display_category(&mut self) -> io::Result<Flow> {
        let Some(category) = self.prompter.ask("Enter category: ")? else {
            return Ok(Flow::Exit);
        };
        let items = self.store.list_by_category(&category);
        let out = self.prompter.output();
        if items.is_empty() {
            self.renderer
                .empty(out, &format!("No items found in category: {category}"))?;
        } else {
            self.renderer
                .listing(out, &format!("Items in category: {category}"), &items)?;
        }
        Ok(Flow::Continue)
    }

    fn top_k(&mut self) -> io::Result<Flow> {
        let Some(k) = self.prompter.ask_parsed::<i64>("Enter the value of k: ")? else {
            return Ok(Flow::Exit);
        };

        let out = self.prompter.output();
        if self.store.is_empty() {
            self.renderer.empty(out, "Inventory is empty.")?;
            return Ok(Flow::Continue);
        }

        let k_items = usize::try_from(k.max(0)).unwrap_or(usize::MAX);
        let items = self.store.top_k(k_items);
        self.renderer
            .listing(out, &format!("Top {k} items with the highest quantity:"), &items)?;
        Ok(Flow::Continue)
    }
}
