//! Namespace scanning through the `Scanner` trait, the `Catalog`, and the global catalog.

use fibre_wiring::{component, global, Catalog, Container, Scanner, TypeDescriptor};
use pretty_assertions::assert_eq;
use std::sync::Arc;

// --- Test Fixtures ---

mod billing {
  use fibre_wiring::{component, Inject};

  pub const ROOT: &str = module_path!();

  #[derive(Default)]
  pub struct Ledger;
  component!(Ledger);

  #[derive(Default)]
  pub struct InvoiceService {
    pub ledger: Inject<Ledger>,
    pub mailer: Inject<super::shipping::Mailer>,
  }
  component!(InvoiceService, slots = [ledger, mailer]);

  pub mod tax {
    use fibre_wiring::component;

    #[derive(Default)]
    pub struct TaxTable;
    component!(TaxTable);
  }
}

mod billing_archive {
  use fibre_wiring::component;

  // Shares a textual prefix with `billing` but is a different namespace.
  #[derive(Default)]
  pub struct ArchivedLedger;
  component!(ArchivedLedger);
}

mod shipping {
  use fibre_wiring::component;

  pub const ROOT: &str = module_path!();

  #[derive(Default)]
  pub struct Mailer;
  component!(Mailer);
}

fn billing_catalog() -> Catalog {
  let catalog = Catalog::new();
  catalog
    .register::<billing::Ledger>()
    .register::<billing::InvoiceService>()
    .register::<billing::tax::TaxTable>()
    .register::<billing_archive::ArchivedLedger>()
    .register::<shipping::Mailer>();
  catalog
}

// --- Catalog Tests ---

#[test]
fn test_scan_finds_nested_modules_only() {
  let catalog = billing_catalog();

  let names: Vec<&str> = catalog
    .scan(billing::ROOT)
    .iter()
    .map(TypeDescriptor::type_name)
    .collect();

  let mut expected = vec![
    std::any::type_name::<billing::InvoiceService>(),
    std::any::type_name::<billing::Ledger>(),
    std::any::type_name::<billing::tax::TaxTable>(),
  ];
  expected.sort();
  assert_eq!(names, expected);
}

#[test]
fn test_reregistration_is_idempotent() {
  let catalog = Catalog::new();
  catalog.register::<shipping::Mailer>();
  catalog.register::<shipping::Mailer>();

  assert_eq!(catalog.len(), 1);
  assert!(catalog.contains::<shipping::Mailer>());
  assert!(!catalog.contains::<billing::Ledger>());
}

#[test]
fn test_container_from_catalog_scan() {
  let catalog = billing_catalog();

  let container = Container::scan(&catalog, billing::ROOT).unwrap();

  assert_eq!(container.len(), 3);
  let invoices = container.get_bean::<billing::InvoiceService>().unwrap();
  let ledger = container.get_bean::<billing::Ledger>().unwrap();
  assert!(Arc::ptr_eq(&invoices.ledger.get().unwrap(), &ledger));
  // The mailer lives outside the scanned namespace.
  assert!(!invoices.mailer.is_bound());
  assert!(container.get_bean::<billing_archive::ArchivedLedger>().is_err());
}

#[test]
fn test_scanning_a_common_root_wires_across_modules() {
  let catalog = billing_catalog();

  let container = Container::scan(&catalog, module_path!()).unwrap();

  assert_eq!(container.len(), 5);
  let invoices = container.get_bean::<billing::InvoiceService>().unwrap();
  let mailer = container.get_bean::<shipping::Mailer>().unwrap();
  assert!(Arc::ptr_eq(&invoices.mailer.get().unwrap(), &mailer));
}

#[test]
fn test_closure_scanner() {
  let scanner = |root: &str| {
    if root == shipping::ROOT {
      vec![TypeDescriptor::of::<shipping::Mailer>()]
    } else {
      Vec::new()
    }
  };

  let container = Container::scan(&scanner, shipping::ROOT).unwrap();
  let empty = Container::scan(&scanner, billing::ROOT).unwrap();

  assert!(container.contains::<shipping::Mailer>());
  assert!(empty.is_empty());
}

// --- Global Catalog Tests ---

mod inventory {
  use fibre_wiring::{component, Inject};

  pub const ROOT: &str = module_path!();

  #[derive(Default)]
  pub struct StockLevels;
  component!(StockLevels);

  #[derive(Default)]
  pub struct Warehouse {
    pub stock: Inject<StockLevels>,
  }
  component!(Warehouse, slots = [stock]);
}

#[test]
fn test_for_namespace_uses_global_catalog() {
  // Arrange
  global()
    .register::<inventory::Warehouse>()
    .register::<inventory::StockLevels>();

  // Act
  let container = Container::for_namespace(inventory::ROOT).unwrap();

  // Assert
  assert_eq!(container.len(), 2);
  let warehouse = container.get_bean::<inventory::Warehouse>().unwrap();
  let stock = container.get_bean::<inventory::StockLevels>().unwrap();
  assert!(Arc::ptr_eq(&warehouse.stock.get().unwrap(), &stock));
}

#[test]
fn test_custom_catalog_is_isolated_from_global() {
  #[derive(Default)]
  struct LocalOnly;
  component!(LocalOnly);

  let custom = Catalog::new();
  custom.register::<LocalOnly>();

  assert!(custom.contains::<LocalOnly>());
  assert!(!global().contains::<LocalOnly>());
}
