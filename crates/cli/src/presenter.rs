//! User-facing wrapper around `InventoryService`.
//!
//! Each operation performs the inventory change and writes its confirmation
//! line. Confirmations are unconditional: deleting a name nobody has still
//! reports the deletion.

use std::io::{self, Write};

use drinkstock_inventory::InventoryService;

#[derive(Debug, Default)]
pub struct Presenter {
    service: InventoryService,
}

impl Presenter {
    pub fn new(service: InventoryService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &InventoryService {
        &self.service
    }

    pub fn add_drink<W: Write>(&mut self, out: &mut W, name: &str, category: &str) -> io::Result<()> {
        self.service.add(name, category);
        writeln!(out, "Drink \"{name}\" added to the system.")
    }

    pub fn delete_drink<W: Write>(&mut self, out: &mut W, name: &str) -> io::Result<()> {
        let removed = self.service.remove(name);
        if removed == 0 {
            tracing::debug!(name, "delete matched no drinks");
        }
        writeln!(out, "Drink \"{name}\" deleted from the system.")
    }

    pub fn sort_drinks_by_category<W: Write>(&self, out: &mut W, category: &str) -> io::Result<()> {
        writeln!(out, "Sorted Drinks (Category: {category}):")?;
        for drink in self.service.list_by_category(category) {
            writeln!(out, "{}", drink.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_reports_the_name() {
        let mut presenter = Presenter::default();
        let text = render(|out| presenter.add_drink(out, "Cola", "Soda"));
        assert_eq!(text, "Drink \"Cola\" added to the system.\n");
        assert_eq!(presenter.service().len(), 1);
    }

    #[test]
    fn delete_reports_even_without_a_match() {
        let mut presenter = Presenter::default();
        let text = render(|out| presenter.delete_drink(out, "Nonexistent"));
        assert_eq!(text, "Drink \"Nonexistent\" deleted from the system.\n");
        assert!(presenter.service().is_empty());
    }

    #[test]
    fn sort_prints_header_then_sorted_names() {
        let mut service = InventoryService::new();
        service.add("Water", "Soda");
        service.add("Beer", "Alcohol");
        service.add("Cola", "Soda");
        let presenter = Presenter::new(service);

        let text = render(|out| presenter.sort_drinks_by_category(out, "Soda"));

        assert_eq!(text, "Sorted Drinks (Category: Soda):\nCola\nWater\n");
    }

    #[test]
    fn sort_prints_only_the_header_for_an_empty_category() {
        let presenter = Presenter::default();
        let text = render(|out| presenter.sort_drinks_by_category(out, "Juice"));
        assert_eq!(text, "Sorted Drinks (Category: Juice):\n");
    }
}
