//! Scripted purchase command.

use clap::Args;
use shiba_core::{PlanId, ProductId};
use shiba_storefront::checkout::PaymentMethod;
use shiba_storefront::personal_info::PersonalInfoForm;
use shiba_storefront::services::ContractForm;
use shiba_storefront::{PurchaseFlow, PurchaseOutcome, PurchaseRequest, Store, StorefrontConfig};

use super::{CommandError, print_json};

/// Inputs for a single purchase.
#[derive(Debug, Args)]
pub struct PurchaseArgs {
    /// Product ID
    #[arg(long)]
    pub product: ProductId,

    /// Installment plan ID (omit to pay the full price)
    #[arg(long)]
    pub plan: Option<PlanId>,

    /// Coupon code (recorded, not applied)
    #[arg(long)]
    pub coupon: Option<String>,

    /// Payment method (`qr`, `transfer`, `card`)
    #[arg(long, default_value = "qr")]
    pub payment: String,

    /// 10-digit mobile number
    #[arg(long)]
    pub phone: String,

    /// 6-digit OTP
    #[arg(long)]
    pub otp: String,

    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Date of birth (`YYYY-MM-DD`)
    #[arg(long)]
    pub dob: Option<String>,

    /// Street address
    #[arg(long)]
    pub address: String,

    /// City
    #[arg(long)]
    pub city: String,

    /// 6-digit pincode
    #[arg(long)]
    pub pincode: String,

    /// Occupation (`student`, `employee`, `business`, `freelancer`, `other`)
    #[arg(long)]
    pub occupation: Option<String>,

    /// Monthly income (`below-25k`, `25k-50k`, `50k-100k`, `above-100k`)
    #[arg(long)]
    pub income: Option<String>,

    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,

    /// Accept the privacy policy
    #[arg(long)]
    pub accept_privacy: bool,

    /// Full name typed as the digital signature
    #[arg(long)]
    pub signature: String,
}

impl From<PurchaseArgs> for PurchaseRequest {
    fn from(args: PurchaseArgs) -> Self {
        Self {
            product: args.product,
            plan: args.plan,
            coupon: args.coupon,
            payment: PaymentMethod::parse(&args.payment),
            phone: args.phone,
            otp: args.otp,
            personal: PersonalInfoForm {
                full_name: args.name,
                email: args.email,
                date_of_birth: args.dob.unwrap_or_default(),
                address: args.address,
                city: args.city,
                pincode: args.pincode,
                occupation: args.occupation.unwrap_or_default(),
                monthly_income: args.income.unwrap_or_default(),
            },
            contract: ContractForm {
                agreed_to_terms: args.accept_terms,
                agreed_to_privacy: args.accept_privacy,
                signature: args.signature,
            },
        }
    }
}

/// Run the purchase and print the receipt.
///
/// # Errors
///
/// Returns `CommandError::App` for the first step that fails.
pub async fn run(
    store: &Store,
    config: &StorefrontConfig,
    args: PurchaseArgs,
    json: bool,
) -> Result<(), CommandError> {
    let request = PurchaseRequest::from(args);
    let flow = PurchaseFlow::new(
        store.clone(),
        config.auth_service(),
        config.contract_service(),
    );

    tracing::info!("Starting purchase of product {}", request.product);
    let outcome = flow.run(&request).await?;

    if json {
        return print_json(&outcome);
    }

    print_receipt(&outcome);
    Ok(())
}

fn print_receipt(outcome: &PurchaseOutcome) {
    println!("{}", outcome.receipt.message);
    println!();
    println!("Product:   {}", outcome.item.product.name);
    match &outcome.item.plan {
        Some(plan) => println!("Plan:      {}", plan.caption()),
        None => println!("Plan:      full payment"),
    }
    if let Some(coupon) = &outcome.item.coupon {
        println!("Coupon:    {coupon}");
    }
    println!("Total:     {}", outcome.receipt.total);
    println!("Signed by: {}", outcome.receipt.signature);
    if let Some(phone) = &outcome.user.phone {
        println!("Phone:     {}", phone.international());
    }
    println!("Email:     {}", outcome.personal.email);
    println!(
        "Address:   {}, {} {}",
        outcome.personal.address, outcome.personal.city, outcome.personal.pincode
    );
}
