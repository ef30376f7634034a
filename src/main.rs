use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use orderflow::application::facade::OrderFacade;
use orderflow::application::pricing::{NoAdjustment, PercentageDiscount, PriceAdjustment};
use orderflow::application::processor::{
    DiscountProcessor, LoggingProcessor, OrderProcessor, OrderProcessorBox,
};
use orderflow::application::proxy::AccessControlledGateway;
use orderflow::application::subject::OrderSubject;
use orderflow::application::workflow::{
    DigitalGoodsWorkflow, PhysicalGoodsWorkflow, WorkflowProcessor,
};
use orderflow::config::{AppConfig, ConfigFile};
use orderflow::domain::order::{Amount, Order, OrderId, OrderStatus};
use orderflow::domain::ports::{OrderRepositoryBox, PaymentGatewayBox};
use orderflow::domain::receipt::Receipt;
use orderflow::domain::role::Role;
use orderflow::error::OrderError;
use orderflow::infrastructure::in_memory::InMemoryOrderRepository;
use orderflow::infrastructure::legacy::{LegacyBillingAdapter, LegacyBillingSystem, to_cents};
use orderflow::infrastructure::observers::LoggingObserver;
use orderflow::infrastructure::simulated::{
    LogNotifier, SimulatedInventory, SimulatedPaymentGateway, SimulatedShipping,
};
use orderflow::interfaces::console::{error_line, receipt_line, status_line};
use orderflow::interfaces::csv::order_reader::OrderReader;
use orderflow::interfaces::csv::order_writer::OrderWriter;
use orderflow::telemetry::setup_tracing;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

const DEMO_API_KEY: &str = "demo-key";

#[derive(Clone, Copy, ValueEnum)]
enum GatewayKind {
    Simulated,
    Legacy,
}

#[derive(Clone, Copy, ValueEnum)]
enum WorkflowKind {
    Facade,
    Physical,
    Digital,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file with an `order,amount` header
    input: PathBuf,

    /// JSON config file with optional `api_key` and `timeout_ms` fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Payment API key. Overrides the config file.
    #[arg(long, env = "ORDERFLOW_API_KEY")]
    api_key: Option<String>,

    /// Per-step timeout in milliseconds. Overrides the config file.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Role the payment calls are made with (admin, customer, guest)
    #[arg(long, default_value = "admin")]
    role: Role,

    #[arg(long, value_enum, default_value_t = GatewayKind::Simulated)]
    gateway: GatewayKind,

    /// Largest charge the legacy billing system approves
    #[arg(long, default_value_t = dec!(1000))]
    legacy_limit: Decimal,

    /// Percentage discount applied to every order before payment
    #[arg(long)]
    discount: Option<Decimal>,

    #[arg(long, value_enum, default_value_t = WorkflowKind::Facade)]
    workflow: WorkflowKind,

    /// Advance completed orders through shipped and delivered
    #[arg(long)]
    deliver: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn build_gateway(cli: &Cli, config: &AppConfig) -> Result<PaymentGatewayBox, OrderError> {
    let inner: PaymentGatewayBox = match cli.gateway {
        GatewayKind::Simulated => Box::new(SimulatedPaymentGateway::new(config)),
        GatewayKind::Legacy => {
            let limit = to_cents(Amount::new(cli.legacy_limit)?)?;
            Box::new(LegacyBillingAdapter::new(LegacyBillingSystem::new(limit)))
        }
    };
    Ok(Box::new(AccessControlledGateway::new(inner, cli.role)))
}

fn build_processor(cli: &Cli, config: &AppConfig) -> Result<impl OrderProcessor, OrderError> {
    let gateway = build_gateway(cli, config)?;
    let base: OrderProcessorBox = match cli.workflow {
        WorkflowKind::Facade => Box::new(
            OrderFacade::new(
                gateway,
                Box::new(SimulatedInventory),
                Box::new(SimulatedShipping),
                Box::new(LogNotifier),
            )
            .with_timeout(config.timeout()),
        ),
        WorkflowKind::Physical => Box::new(WorkflowProcessor::new(PhysicalGoodsWorkflow::new(
            gateway,
            Box::new(SimulatedInventory),
            Box::new(SimulatedShipping),
        ))),
        WorkflowKind::Digital => Box::new(WorkflowProcessor::new(DigitalGoodsWorkflow::new(
            gateway,
            Box::new(LogNotifier),
        ))),
    };

    let adjustment: Box<dyn PriceAdjustment> = match cli.discount {
        Some(percent) => Box::new(PercentageDiscount::new(percent)?),
        None => Box::new(NoAdjustment),
    };

    Ok(LoggingProcessor::new(DiscountProcessor::new(base, adjustment)))
}

fn deliver(order: Order) -> Result<Order, OrderError> {
    let mut subject = OrderSubject::new(order);
    subject.add_observer(Arc::new(LoggingObserver));
    subject.set_status(OrderStatus::Shipped)?;
    subject.set_status(OrderStatus::Delivered)?;
    Ok(subject.into_order())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    // Configuration is resolved once here and passed down explicitly.
    let file = match &cli.config {
        Some(path) => ConfigFile::from_path(path).into_diagnostic()?,
        None => ConfigFile::default(),
    };
    let config = file
        .resolve(cli.api_key.clone(), cli.timeout_ms, DEMO_API_KEY)
        .into_diagnostic()?;

    let processor = build_processor(&cli, &config).into_diagnostic()?;
    let repository: OrderRepositoryBox = Box::new(InMemoryOrderRepository::new());
    let mut outcomes: HashMap<OrderId, Result<Receipt, OrderError>> = HashMap::new();

    let input = File::open(&cli.input).into_diagnostic()?;
    let reader = OrderReader::new(input);
    for order_result in reader.orders() {
        let mut order = match order_result {
            Ok(order) => order,
            Err(e) => {
                eprintln!("Error reading order: {}", e);
                continue;
            }
        };

        let outcome = match processor.process(&mut order).await {
            Ok(receipt) => {
                if cli.deliver && receipt.is_completed() {
                    order = deliver(order).into_diagnostic()?;
                }
                Ok(receipt)
            }
            Err(e) => {
                eprintln!("Error processing order: {}", e);
                Err(e)
            }
        };
        outcomes.insert(order.id().clone(), outcome);
        repository.store(order).await.into_diagnostic()?;
    }

    let orders = repository.all_orders().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Csv => {
            let rows = orders.iter().map(|order| {
                let receipt = outcomes.get(order.id()).and_then(|o| o.as_ref().ok());
                (order, receipt)
            });
            OrderWriter::new(out).write_orders(rows).into_diagnostic()?;
        }
        OutputFormat::Text => {
            for order in &orders {
                let line = match outcomes.get(order.id()) {
                    Some(Ok(receipt)) => receipt_line(order, receipt),
                    Some(Err(e)) => error_line(order, e),
                    None => status_line(order),
                };
                writeln!(out, "{line}").into_diagnostic()?;
                if cli.deliver && order.status() == OrderStatus::Delivered {
                    writeln!(out, "{}", status_line(order)).into_diagnostic()?;
                }
            }
        }
        OutputFormat::Json => {
            for order in &orders {
                if let Some(Ok(receipt)) = outcomes.get(order.id()) {
                    let json = serde_json::to_string(receipt).into_diagnostic()?;
                    writeln!(out, "{json}").into_diagnostic()?;
                }
            }
        }
    }

    Ok(())
}
