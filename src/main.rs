// region:    --- Imports
use campus_bazaar::admin::AdminDashboard;
use campus_bazaar::auth::{AuthFlow, SignupDetails};
use campus_bazaar::bidding::{commands as bid_commands, ProductPanel};
use campus_bazaar::config::ClientConfig;
use campus_bazaar::feedback::FormStatus;
use campus_bazaar::listing::{
    CategoryFilter, ImageFile, ListingBrowser, ListingDraft, PostingForm, Product,
};
use campus_bazaar::profile::{ProfileDrawer, ProfileEdit};
use campus_bazaar::query::{commands as query_commands, Query};
use campus_bazaar::seller::{MyListings, SellerPanel};
use campus_bazaar::AppContext;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Cli
#[derive(Parser, Debug)]
#[command(name = "campus-bazaar")]
#[command(about = "Campus marketplace client: browse, post, bid and manage listings", long_about = None)]
struct Cli {
    /// 백엔드 호스트 (BAZAAR_API_URL보다 우선)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Sign up: request an OTP, then enter it when prompted
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        roll_no: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        hostel: String,
    },
    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Browse active listings
    Browse {
        #[arg(short, long, default_value = "All")]
        category: String,
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Post an item for sale
    Post {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        category: String,
        /// YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,
        /// Up to 4 images
        #[arg(long = "image", value_name = "FILE")]
        images: Vec<PathBuf>,
    },
    /// Show a product with its highest bid and queries
    Product { product_id: i64 },
    /// Place a bid on a product
    Bid { product_id: i64, amount: String },
    /// List your bids
    MyBids,
    /// Post, edit or delete queries
    Query {
        #[command(subcommand)]
        action: QueryAction,
    },
    /// Manage your own listings
    Seller {
        #[command(subcommand)]
        action: SellerAction,
    },
    /// Admin approval dashboard
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    Show,
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        hostel: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum QueryAction {
    Post { product_id: i64, text: String },
    Edit { query_id: i64, text: String },
    Delete { query_id: i64 },
}

#[derive(Subcommand, Debug)]
enum SellerAction {
    Listings,
    Show {
        product_id: i64,
    },
    Edit {
        product_id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    Delete {
        product_id: i64,
    },
    Reply {
        product_id: i64,
        query_id: i64,
        text: String,
    },
    Buyer {
        product_id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum AdminAction {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Pending,
    Approve {
        product_id: i64,
    },
    Disapprove {
        product_id: i64,
    },
    Logout,
}

// endregion: --- Cli

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    info!("{:<12} --> 백엔드: {}", "Main", config.api_url);

    let ctx = AppContext::from_config(&config)?;

    // 실패는 해당 동작에서 끝난다. 메시지만 보여주고 종료 코드로 알린다.
    if let Err(e) = run(ctx, cli.command).await {
        error!("{:<12} --> 실패: {}", "Main", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(ctx: AppContext, command: Command) -> campus_bazaar::Result<()> {
    match command {
        Command::Login { email, password } => {
            let mut flow = AuthFlow::new(ctx);
            let result = flow.login(&email, &password).await;
            show_status(flow.status());
            result
        }
        Command::Logout => {
            let mut flow = AuthFlow::new(ctx);
            flow.logout().await?;
            show_status(flow.status());
            Ok(())
        }
        Command::Signup {
            name,
            roll_no,
            phone,
            email,
            password,
            hostel,
        } => {
            let details = SignupDetails {
                name,
                roll_no,
                phone_no: phone,
                email,
                password,
                hostel,
            };
            signup(ctx, details).await
        }
        Command::Profile { action } => profile(ctx, action.unwrap_or(ProfileAction::Show)).await,
        Command::Browse { category, search } => {
            let category: CategoryFilter = category
                .parse()
                .map_err(campus_bazaar::ClientError::Validation)?;
            let mut browser = ListingBrowser::with_category(ctx, category);
            browser.set_search(search);
            let result = browser.load().await;
            show_status(browser.status());
            result?;
            let visible = browser.visible();
            if visible.is_empty() {
                println!("{}", browser.empty_message());
            }
            for product in visible {
                print_product_line(product);
            }
            Ok(())
        }
        Command::Post {
            name,
            description,
            price,
            category,
            deadline,
            images,
        } => {
            let mut files = Vec::with_capacity(images.len());
            for path in images {
                files.push(ImageFile::from_path(path).await?);
            }
            let draft = ListingDraft {
                name,
                description,
                asking_price: price,
                category,
                deadline,
                images: files,
            };
            let mut form = PostingForm::new(ctx);
            let result = form.submit(draft).await;
            show_status(form.status());
            let outcome = result?;
            println!(
                "Listing #{} ({}), {} image(s) uploaded",
                outcome.product.product_id, outcome.product.status, outcome.images_uploaded
            );
            Ok(())
        }
        Command::Product { product_id } => {
            let mut panel = ProductPanel::new(ctx, product_id);
            let result = panel.load().await;
            show_status(panel.status());
            result?;
            if let Some(product) = panel.product() {
                print_product_detail(product);
            }
            print_highest(panel.highest_bid());
            print_queries(panel.queries().queries());
            Ok(())
        }
        Command::Bid { product_id, amount } => {
            let mut panel = ProductPanel::new(ctx, product_id);
            panel.load().await?;
            let result = panel.place_bid(&amount).await;
            show_status(panel.bid_status());
            result?;
            print_highest(panel.highest_bid());
            Ok(())
        }
        Command::MyBids => {
            let bids = bid_commands::fetch_my_bids(&ctx).await?;
            if bids.is_empty() {
                println!("You haven't placed any bids yet.");
            }
            for bid in bids {
                println!(
                    "#{:<5} {:<30} bid ₹{:<10} asking ₹{:<10} {}",
                    bid.product_id, bid.product_name, bid.amount, bid.asking_price, bid.status
                );
            }
            Ok(())
        }
        Command::Query { action } => query(ctx, action).await,
        Command::Seller { action } => seller(ctx, action).await,
        Command::Admin { action } => admin(ctx, action).await,
    }
}

// endregion: --- Main

// region:    --- Commands
/// OTP 요청 후 표준 입력으로 OTP를 받아 확인
async fn signup(ctx: AppContext, details: SignupDetails) -> campus_bazaar::Result<()> {
    let mut flow = AuthFlow::signup(ctx);
    let result = flow.request_otp(&details).await;
    show_status(flow.status());
    result?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("Enter OTP (empty to cancel):");
        let otp = lines.next_line().await?.unwrap_or_default();
        if otp.trim().is_empty() {
            println!("Signup cancelled.");
            return Ok(());
        }
        let result = flow.verify_otp(&otp).await;
        show_status(flow.status());
        match result {
            Ok(()) => return Ok(()),
            // 잘못된 OTP는 같은 단계에서 다시 입력
            Err(e) if flow.step() == campus_bazaar::auth::AuthStep::SignupOtpVerify => {
                info!("{:<12} --> OTP 재입력: {}", "Signup", e);
            }
            Err(e) => return Err(e),
        }
    }
}

async fn profile(ctx: AppContext, action: ProfileAction) -> campus_bazaar::Result<()> {
    let mut drawer = ProfileDrawer::new(ctx);
    let result = match action {
        ProfileAction::Show => drawer.open().await.map(|_| ()),
        ProfileAction::Edit {
            name,
            phone,
            email,
            hostel,
        } => {
            let edit = ProfileEdit {
                name,
                phone_no: phone,
                email,
                hostel,
            };
            drawer.save(&edit).await
        }
    };
    show_status(drawer.status());
    result?;
    if let Some(p) = drawer.profile() {
        println!("Name:     {}", p.name);
        println!("Roll No:  {}", p.roll_no);
        println!("Phone:    {}", p.phone_no);
        println!("Email:    {}", p.email);
        println!("Hostel:   {}", p.hostel);
    }
    Ok(())
}

async fn query(ctx: AppContext, action: QueryAction) -> campus_bazaar::Result<()> {
    match action {
        QueryAction::Post { product_id, text } => {
            let q = query_commands::post_query(&ctx, product_id, &text).await?;
            println!("Query #{} posted.", q.query_id);
        }
        QueryAction::Edit { query_id, text } => {
            query_commands::edit_query(&ctx, query_id, &text).await?;
            println!("Query #{} updated.", query_id);
        }
        QueryAction::Delete { query_id } => {
            query_commands::delete_query(&ctx, query_id).await?;
            println!("Query #{} deleted.", query_id);
        }
    }
    Ok(())
}

async fn seller(ctx: AppContext, action: SellerAction) -> campus_bazaar::Result<()> {
    match action {
        SellerAction::Listings => {
            let mut listings = MyListings::new(ctx);
            let result = listings.load().await;
            show_status(listings.status());
            result?;
            if listings.products().is_empty() {
                println!("You have no listings. Post an item to get started!");
            }
            for product in listings.products() {
                print_product_line(product);
            }
        }
        SellerAction::Show { product_id } => {
            let mut panel = SellerPanel::new(ctx, product_id);
            let result = panel.load().await;
            show_status(panel.status());
            result?;
            if let Some(product) = panel.product() {
                print_product_detail(product);
            }
            if panel.bids().is_empty() {
                println!("No bids yet.");
            }
            for bid in panel.bids() {
                println!(
                    "Bid ₹{} by {} ({})",
                    bid.amount,
                    bid.bidder_or_anonymous(),
                    bid.roll_no.as_deref().unwrap_or("N/A")
                );
            }
            print_queries(panel.queries().queries());
        }
        SellerAction::Edit {
            product_id,
            name,
            description,
            price,
            image,
        } => {
            let mut panel = SellerPanel::new(ctx, product_id);
            panel.load().await?;
            let mut edit = panel.edit_form().unwrap_or_default();
            if let Some(v) = name {
                edit.name = v;
            }
            if let Some(v) = description {
                edit.description = v;
            }
            if let Some(v) = price {
                edit.asking_price = v;
            }
            if let Some(v) = image {
                edit.image = v;
            }
            let result = panel.save_edit(&edit).await;
            show_status(panel.edit_status());
            result?;
        }
        SellerAction::Delete { product_id } => {
            let mut panel = SellerPanel::new(ctx, product_id);
            let result = panel.delete().await;
            show_status(panel.status());
            result?;
        }
        SellerAction::Reply {
            product_id,
            query_id,
            text,
        } => {
            let mut panel = SellerPanel::new(ctx, product_id);
            panel.load().await?;
            let result = panel.reply(query_id, &text).await;
            if let Some(e) = panel.queries().reply_error(query_id) {
                println!("Error: {}", e);
            }
            result?;
            println!("Reply sent.");
        }
        SellerAction::Buyer { product_id } => {
            let mut panel = SellerPanel::new(ctx, product_id);
            panel.load().await?;
            let result = panel.buyer_info().await.cloned();
            show_status(panel.status());
            let buyer = result?;
            println!("Buyer:   {}", buyer.name);
            println!("Roll No: {}", buyer.roll_no.as_deref().unwrap_or("N/A"));
            println!("Phone:   {}", buyer.phone_no.as_deref().unwrap_or("N/A"));
            println!("Email:   {}", buyer.email.as_deref().unwrap_or("N/A"));
            println!("Hostel:  {}", buyer.hostel.as_deref().unwrap_or("N/A"));
            if let Some(amount) = buyer.amount {
                println!("Amount:  ₹{}", amount);
            }
        }
    }
    Ok(())
}

async fn admin(ctx: AppContext, action: AdminAction) -> campus_bazaar::Result<()> {
    let mut dashboard = AdminDashboard::new(ctx);
    match action {
        AdminAction::Login { username, password } => {
            let result = dashboard.login(&username, &password).await;
            show_status(dashboard.login_status());
            result?;
            print_pending(dashboard.pending());
        }
        AdminAction::Pending => {
            let result = dashboard.refresh().await;
            show_status(dashboard.status());
            result?;
            print_pending(dashboard.pending());
        }
        AdminAction::Approve { product_id } => {
            let result = dashboard.approve(product_id).await;
            show_status(dashboard.status());
            result?;
        }
        AdminAction::Disapprove { product_id } => {
            let result = dashboard.disapprove(product_id).await;
            show_status(dashboard.status());
            result?;
        }
        AdminAction::Logout => {
            dashboard.logout().await?;
            show_status(dashboard.status());
        }
    }
    Ok(())
}

// endregion: --- Commands

// region:    --- Output
fn show_status(status: &FormStatus) {
    if status.message().is_some() {
        println!("{}", status);
    }
}

fn print_product_line(product: &Product) {
    println!(
        "#{:<5} {:<30} ₹{:<10} {}",
        product.product_id,
        product.name,
        product.asking_price,
        product
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
}

fn print_product_detail(product: &Product) {
    println!("{} (#{})", product.name, product.product_id);
    println!("Description:  {}", product.description_or_default());
    println!("Asking Price: ₹{}", product.asking_price);
    println!("Status:       {}", product.status);
    println!("Image:        {}", product.image_or_default());
    if let Some(deadline) = product.deadline {
        println!("Deadline:     {}", deadline.format("%Y-%m-%d"));
    }
}

fn print_highest(highest: Option<f64>) {
    match highest {
        Some(amount) => println!("Current Highest Bid: ₹{}", amount),
        None => println!("No bids yet."),
    }
}

fn print_queries(queries: &[Query]) {
    if queries.is_empty() {
        println!("No queries yet.");
    }
    for q in queries {
        println!("[{}] {}: {}", q.query_id, q.author_or_anonymous(), q.query);
        if let Some(reply) = q.reply.as_deref().filter(|_| q.is_answered()) {
            println!("    Seller: {}", reply);
        }
    }
}

fn print_pending(products: &[Product]) {
    if products.is_empty() {
        println!("No products awaiting approval.");
    }
    for product in products {
        print_product_line(product);
    }
}

// endregion: --- Output
