use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use stockpile::api::{
    CmdMessage, CmdResult, DisplayProduct, MessageLevel, NewProduct, SearchQuery, SortKey,
    StockpileApi,
};
use stockpile::config::StockpileConfig;
use stockpile::error::{Result, StockpileError};
use stockpile::model::{Product, Role};
use stockpile::store::fs::FileStore;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = StockpileConfig::default();
    let store = FileStore::new(config.path.clone());
    let mut api = StockpileApi::new(store, config);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let role = match cli.user {
        Some(name) => resolve_role(&name),
        None => {
            println!("Login");
            let name = prompt(&mut input, "Enter username (admin/staff): ")?;
            resolve_role(&name)
        }
    };

    loop {
        print_menu(role);
        let Some(choice) = read_trimmed_line(&mut input)? else {
            // stdin closed; nothing more will ever arrive
            break;
        };

        match choice.as_str() {
            "1" => handle_add(&mut api, &mut input)?,
            "2" => handle_update(&mut api, &mut input)?,
            "3" if role.is_admin() => handle_delete(&mut api, role, &mut input)?,
            "4" => handle_view(&api),
            "5" => handle_search(&api, &mut input)?,
            "6" => handle_sort(&api, &mut input)?,
            "7" => {
                println!("Exiting... Goodbye!");
                break;
            }
            _ => println!("{}", "Invalid choice or permission denied.".red()),
        }
    }

    Ok(())
}

/// Unknown usernames get a warning but still log in, as staff.
fn resolve_role(name: &str) -> Role {
    if !Role::is_known(name) {
        println!("{}", "Invalid user. Defaulting to staff.".yellow());
    }
    Role::parse(name)
}

fn print_menu(role: Role) {
    println!();
    println!("{}", format!("Inventory Management ({}):", role.label()).bold());
    println!("1. Add New Product");
    println!("2. Update Product Quantity");
    if role.is_admin() {
        println!("3. Delete Product");
    }
    println!("4. View Inventory");
    println!("5. Search Product");
    println!("6. Sort Inventory");
    println!("7. Exit");
    print!("Choose an option: ");
    let _ = io::stdout().flush();
}

fn handle_add<R: BufRead>(api: &mut StockpileApi<FileStore>, input: &mut R) -> Result<()> {
    let id = prompt(input, "Enter Product ID: ")?;
    let name = prompt(input, "Enter Product Name: ")?;
    let category = prompt(input, "Enter Category (e.g., electronics, groceries): ")?;
    let price_text = prompt(input, "Enter Price: ")?;
    let quantity_text = prompt(input, "Enter Quantity: ")?;

    let outcome = parse_price(&price_text).and_then(|price| {
        let quantity = parse_integer(&quantity_text)?;
        api.add_product(NewProduct::new(id, name, category, price, quantity))
    });
    report(outcome);
    Ok(())
}

fn handle_update<R: BufRead>(api: &mut StockpileApi<FileStore>, input: &mut R) -> Result<()> {
    let id = prompt(input, "Enter Product ID to update: ")?;
    let delta_text = prompt(input, "Enter quantity change (+/-): ")?;

    let outcome = parse_integer(&delta_text).and_then(|delta| api.update_quantity(&id, delta));
    report(outcome);
    Ok(())
}

fn handle_delete<R: BufRead>(
    api: &mut StockpileApi<FileStore>,
    role: Role,
    input: &mut R,
) -> Result<()> {
    let id = prompt(input, "Enter Product ID to delete: ")?;
    report(api.delete_product(role, &id));
    Ok(())
}

fn handle_view(api: &StockpileApi<FileStore>) {
    match api.view_inventory() {
        Ok(result) => {
            println!();
            println!("Inventory List:");
            print_table(&result.listed);
            print_messages(&result.messages);
        }
        Err(e) => print_error(&e),
    }
}

fn handle_search<R: BufRead>(api: &StockpileApi<FileStore>, input: &mut R) -> Result<()> {
    println!();
    println!("Search Options:");
    println!("1. By Product ID");
    println!("2. By Name");
    println!("3. By Category");
    let choice = prompt(input, "Choose option (1-3): ")?;

    let query = match choice.as_str() {
        "1" => SearchQuery::ById(prompt(input, "Enter Product ID: ")?),
        "2" => SearchQuery::ByName(prompt(input, "Enter Product Name: ")?),
        "3" => SearchQuery::ByCategory(prompt(input, "Enter category: ")?),
        other => {
            print_error(&StockpileError::InvalidChoice(other.to_string()));
            return Ok(());
        }
    };

    match api.search_products(query) {
        Ok(result) => {
            for dp in &result.listed {
                print_product(&dp.product);
            }
            print_messages(&result.messages);
        }
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_sort<R: BufRead>(api: &StockpileApi<FileStore>, input: &mut R) -> Result<()> {
    println!();
    println!("Sort By:");
    println!("1. Name");
    println!("2. Price");
    println!("3. Quantity");
    let choice = prompt(input, "Choose sort option (1-3): ")?;

    let key = match choice.as_str() {
        "1" => SortKey::Name,
        "2" => SortKey::Price,
        "3" => SortKey::Quantity,
        other => {
            print_error(&StockpileError::InvalidChoice(other.to_string()));
            return Ok(());
        }
    };

    match api.sort_inventory(key) {
        Ok(result) => {
            println!();
            println!("Sorted Inventory:");
            print_table(&result.listed);
        }
        Err(e) => print_error(&e),
    }
    Ok(())
}

// --- operator input ---

/// One trimmed line, or `None` once stdin is exhausted.
fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    read_trimmed_line(input)?.ok_or_else(|| {
        StockpileError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended mid-operation",
        ))
    })
}

fn parse_price(text: &str) -> Result<f64> {
    text.parse()
        .map_err(|_| StockpileError::InvalidNumber(text.to_string()))
}

fn parse_integer(text: &str) -> Result<i64> {
    text.parse()
        .map_err(|_| StockpileError::InvalidNumber(text.to_string()))
}

// --- rendering ---

/// Operation outcome with no listing: success messages or the error line.
fn report(outcome: Result<CmdResult>) {
    match outcome {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e),
    }
}

fn print_error(e: &StockpileError) {
    println!("{}", e.to_string().red());
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_table(listed: &[DisplayProduct]) {
    println!(
        "{}",
        format!(
            "{:<10} {:<20} {:<15} {:<10} {:<10}",
            "ID", "Name", "Category", "Price", "Qty"
        )
        .bold()
    );
    println!("{}", "-".repeat(70));
    for dp in listed {
        let line = format!(
            "{:<10} {:<20} {:<15} {:<10} {:<10}",
            dp.product.product_id,
            dp.product.name,
            dp.product.category,
            dp.product.price_text(),
            dp.product.quantity
        );
        if dp.low_stock {
            println!("{} {}", line, "LOW".yellow());
        } else {
            println!("{}", line);
        }
    }
}

fn print_product(product: &Product) {
    println!();
    println!("Product Found:");
    println!("ID: {}", product.product_id);
    println!("Name: {}", product.name);
    println!("Category: {}", product.category);
    println!("Price: {}", product.price_text());
    println!("Quantity: {}", product.quantity);
}
