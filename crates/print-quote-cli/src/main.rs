use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use print_quote::{
    CostTable, JobSpecification, MemberType, PaperStock, PriceBreakdown, ProductionCategory,
    SheetSize, compute_book_price, compute_flyer_price, lookup_margin,
};

#[derive(Parser)]
#[command(name = "printq", about = "Print-shop quotation CLI", version)]
struct Cli {
    /// Cost-table snapshot (JSON); built-in defaults apply when omitted
    #[arg(long, global = true)]
    costs: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote an unbound sheet job
    Flyer {
        /// Production route
        #[arg(long, default_value = "small", value_enum)]
        category: FlyerCategoryArg,

        /// Trim size class
        #[arg(long, default_value = "a4", value_enum)]
        size: SizeArg,

        /// Custom trim width in mm (classified into the nearest size)
        #[arg(long, requires = "height")]
        width: Option<u32>,

        /// Custom trim height in mm
        #[arg(long, requires = "width")]
        height: Option<u32>,

        /// Quantity in pieces
        #[arg(short, long)]
        quantity: u32,

        /// Paper stock name
        #[arg(long, default_value = "woodfree")]
        paper: String,

        /// Paper grammage
        #[arg(long, default_value = "100")]
        gram: u32,

        /// Print color mode
        #[arg(long, default_value = "color", value_enum)]
        color: ColorArg,

        /// Print one side only
        #[arg(long)]
        single_sided: bool,

        /// Margin percentage (overrides the configured rate)
        #[arg(long)]
        margin: Option<f64>,

        /// Customer tier for the configured margin
        #[arg(long, default_value = "general", value_enum)]
        member: MemberArg,
    },

    /// Quote a bound multi-page job
    Book {
        /// Production route
        #[arg(long, default_value = "indigo", value_enum)]
        category: BookCategoryArg,

        /// Trim size class
        #[arg(long, default_value = "a4", value_enum)]
        size: SizeArg,

        /// Custom trim width in mm (classified into the nearest size)
        #[arg(long, requires = "height")]
        width: Option<u32>,

        /// Custom trim height in mm
        #[arg(long, requires = "width")]
        height: Option<u32>,

        /// Quantity in copies
        #[arg(short, long)]
        quantity: u32,

        /// Inner page count
        #[arg(short, long)]
        pages: u32,

        /// Inner paper stock name
        #[arg(long, default_value = "woodfree")]
        inner_paper: String,

        /// Inner paper grammage
        #[arg(long, default_value = "100")]
        inner_gram: u32,

        /// Inner print color mode
        #[arg(long, default_value = "color", value_enum)]
        inner_color: ColorArg,

        /// Cover paper stock name
        #[arg(long, default_value = "art")]
        cover_paper: String,

        /// Cover paper grammage
        #[arg(long, default_value = "200")]
        cover_gram: u32,

        /// Cover print color mode
        #[arg(long, default_value = "color", value_enum)]
        cover_color: ColorArg,

        /// Binding method
        #[arg(long, default_value = "perfect", value_enum)]
        bind: BindArg,

        /// Cover coating
        #[arg(long, default_value = "none", value_enum)]
        coating: CoatingArg,

        /// Printed cover pages (4 = both sides, 2 = outside only)
        #[arg(long, default_value = "4")]
        cover_pages: u32,

        /// Margin percentage (overrides the configured rate)
        #[arg(long)]
        margin: Option<f64>,

        /// Customer tier for the configured margin
        #[arg(long, default_value = "general", value_enum)]
        member: MemberArg,
    },

    /// List the paper catalog with per-ream prices
    Papers,
}

#[derive(Clone, Copy, ValueEnum)]
enum FlyerCategoryArg {
    Small,
    Large,
}

#[derive(Clone, Copy, ValueEnum)]
enum BookCategoryArg {
    Indigo,
    Digital,
    Offset,
}

#[derive(Clone, Copy, ValueEnum)]
enum SizeArg {
    A4,
    B5,
    A5,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Color,
    Mono,
}

#[derive(Clone, Copy, ValueEnum)]
enum BindArg {
    Saddle,
    Perfect,
}

#[derive(Clone, Copy, ValueEnum)]
enum CoatingArg {
    None,
    Matte,
    Gloss,
}

#[derive(Clone, Copy, ValueEnum)]
enum MemberArg {
    General,
    Business,
}

impl From<FlyerCategoryArg> for ProductionCategory {
    fn from(arg: FlyerCategoryArg) -> Self {
        match arg {
            FlyerCategoryArg::Small => Self::SmallDigitalFlyer,
            FlyerCategoryArg::Large => Self::LargeOffsetFlyer,
        }
    }
}

impl From<BookCategoryArg> for ProductionCategory {
    fn from(arg: BookCategoryArg) -> Self {
        match arg {
            BookCategoryArg::Indigo => Self::SmallDigitalColorBook,
            BookCategoryArg::Digital => Self::SmallDigitalMonoBook,
            BookCategoryArg::Offset => Self::LargeOffsetBook,
        }
    }
}

impl From<SizeArg> for SheetSize {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::A4 => Self::A4,
            SizeArg::B5 => Self::B5,
            SizeArg::A5 => Self::A5,
        }
    }
}

impl From<ColorArg> for print_quote::ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Color => Self::Color,
            ColorArg::Mono => Self::Mono,
        }
    }
}

impl From<BindArg> for print_quote::BindType {
    fn from(arg: BindArg) -> Self {
        match arg {
            BindArg::Saddle => Self::Saddle,
            BindArg::Perfect => Self::Perfect,
        }
    }
}

impl From<CoatingArg> for print_quote::Coating {
    fn from(arg: CoatingArg) -> Self {
        match arg {
            CoatingArg::None => Self::None,
            CoatingArg::Matte => Self::Matte,
            CoatingArg::Gloss => Self::Gloss,
        }
    }
}

impl From<MemberArg> for MemberType {
    fn from(arg: MemberArg) -> Self {
        match arg {
            MemberArg::General => Self::General,
            MemberArg::Business => Self::Business,
        }
    }
}

fn resolve_size(size: SizeArg, width: Option<u32>, height: Option<u32>) -> SheetSize {
    match (width, height) {
        (Some(w), Some(h)) => SheetSize::from_dimensions_mm(w, h),
        _ => size.into(),
    }
}

fn print_breakdown(breakdown: &PriceBreakdown) {
    println!("Quote ({} x {}):", breakdown.category.key(), breakdown.quantity);
    println!("  Paper:    {}", breakdown.paper_cost);
    println!("  Press:    {}", breakdown.press_cost);
    if breakdown.plate_cost > 0 {
        println!("  Plates:   {}", breakdown.plate_cost);
    }
    if breakdown.coating_cost > 0 {
        println!("  Coating:  {}", breakdown.coating_cost);
    }
    if breakdown.binding_cost > 0 {
        println!("  Binding:  {}", breakdown.binding_cost);
    }
    println!("  Supply:   {}", breakdown.supply_cost);
    println!("  Shipping: {}", breakdown.shipping_cost);
    println!("  VAT:      {}", breakdown.vat);
    println!("  Total:    {}", breakdown.total);

    let per_unit = (breakdown.total as f64 / breakdown.quantity as f64).round() as i64;
    println!("  Per unit: {}", per_unit);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let costs = match &cli.costs {
        Some(path) => CostTable::load(path).await?,
        None => CostTable::default(),
    };

    match cli.command {
        Commands::Flyer {
            category,
            size,
            width,
            height,
            quantity,
            paper,
            gram,
            color,
            single_sided,
            margin,
            member,
        } => {
            let category: ProductionCategory = category.into();
            let spec = JobSpecification {
                size: resolve_size(size, width, height),
                inner_paper: PaperStock::new(paper, gram),
                inner_color: color.into(),
                double_sided: !single_sided,
                ..Default::default()
            };
            let margin =
                margin.unwrap_or_else(|| lookup_margin(&costs, category, member.into()));
            let breakdown = compute_flyer_price(category, quantity, margin, &spec, &costs)?;
            print_breakdown(&breakdown);
        }

        Commands::Book {
            category,
            size,
            width,
            height,
            quantity,
            pages,
            inner_paper,
            inner_gram,
            inner_color,
            cover_paper,
            cover_gram,
            cover_color,
            bind,
            coating,
            cover_pages,
            margin,
            member,
        } => {
            let category: ProductionCategory = category.into();
            let spec = JobSpecification {
                size: resolve_size(size, width, height),
                inner_paper: PaperStock::new(inner_paper, inner_gram),
                cover_paper: PaperStock::new(cover_paper, cover_gram),
                inner_color: inner_color.into(),
                cover_color: cover_color.into(),
                bind: bind.into(),
                coating: coating.into(),
                cover_pages,
                inner_pages: pages,
                ..Default::default()
            };
            let margin =
                margin.unwrap_or_else(|| lookup_margin(&costs, category, member.into()));
            let breakdown = compute_book_price(category, quantity, margin, &spec, &costs)?;
            print_breakdown(&breakdown);
        }

        Commands::Papers => {
            println!("Paper catalog (price per yeon):");
            for (name, gram, price) in costs.paper_stocks() {
                println!("  {:<10} {:>4}g  {}", name, gram, price);
            }
        }
    }

    Ok(())
}
