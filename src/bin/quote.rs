//! Single-scenario cost quote as JSON

use anyhow::Context;
use clap::Parser;
use property_costs::costs::calculate_costs;
use property_costs::profile::{
    BuyerProfile, BuyerType, Jurisdiction, LoanTerms, OngoingFees, PropertyCategory,
    PropertyProfile, PropertyType, RepaymentType, Residency, Scenario, UpfrontFees, WaRegion,
    WaZone,
};

#[derive(Parser, Debug)]
#[command(name = "quote", about = "Quote the purchase costs for one property scenario")]
struct Args {
    /// Contract price in dollars
    #[arg(long)]
    price: f64,

    /// Jurisdiction code (NSW, VIC, QLD, SA, WA, TAS, NT, ACT)
    #[arg(long)]
    state: String,

    /// Property category: house, apartment, townhouse or land
    #[arg(long, default_value = "house")]
    category: String,

    /// Property type: existing, new_build, off_the_plan or house_and_land
    #[arg(long = "type", default_value = "existing")]
    property_type: String,

    #[arg(long)]
    first_home_buyer: bool,

    #[arg(long)]
    investor: bool,

    #[arg(long)]
    foreign: bool,

    /// TAS pensioner concession flag
    #[arg(long)]
    pensioner: bool,

    /// TAS senior concession flag
    #[arg(long)]
    senior: bool,

    /// Regional property flag
    #[arg(long)]
    regional: bool,

    /// WA: property is north of the 26th parallel
    #[arg(long)]
    wa_north: bool,

    /// WA: property is outside the metropolitan area
    #[arg(long)]
    wa_non_metro: bool,

    /// QLD: claim the vacant land concession
    #[arg(long)]
    vacant_land_concession: bool,

    /// Deposit in dollars; enables loan modelling together with --rate
    /// and --term
    #[arg(long)]
    deposit: Option<f64>,

    /// Annual interest rate percentage
    #[arg(long)]
    rate: Option<f64>,

    /// Loan term in years
    #[arg(long)]
    term: Option<u32>,

    /// Interest-only window in years
    #[arg(long, default_value_t = 0)]
    interest_only_years: u32,

    /// Capitalize LMI into the loan
    #[arg(long)]
    include_lmi: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let jurisdiction: Jurisdiction = args
        .state
        .parse()
        .with_context(|| format!("invalid state {:?}", args.state))?;

    let category = match args.category.to_ascii_lowercase().as_str() {
        "apartment" | "unit" => PropertyCategory::Apartment,
        "townhouse" => PropertyCategory::Townhouse,
        "land" => PropertyCategory::Land,
        _ => PropertyCategory::House,
    };
    let property_type = match args.property_type.to_ascii_lowercase().as_str() {
        "new_build" | "new" => PropertyType::NewBuild,
        "off_the_plan" => PropertyType::OffThePlan,
        "house_and_land" => PropertyType::HouseAndLand,
        _ => PropertyType::Existing,
    };

    let property = PropertyProfile {
        price: args.price,
        jurisdiction,
        category,
        property_type,
        wa_region: if args.wa_north { WaRegion::North } else { WaRegion::South },
        wa_zone: if args.wa_non_metro { WaZone::NonMetro } else { WaZone::Metro },
        regional: args.regional,
        claim_vacant_land_concession: args.vacant_land_concession,
        build_cost: None,
    };

    let buyer = BuyerProfile {
        buyer_type: if args.investor { BuyerType::Investor } else { BuyerType::OwnerOccupier },
        principal_residence: !args.investor,
        residency: if args.foreign { Residency::Foreign } else { Residency::Resident },
        first_home_buyer: args.first_home_buyer,
        pensioner: args.pensioner,
        senior: args.senior,
        needs_loan: args.deposit.is_some(),
    };

    let loan = match (args.deposit, args.rate, args.term) {
        (Some(deposit), Some(rate), Some(term)) => {
            let mut terms = LoanTerms::standard(deposit, rate, term);
            if args.interest_only_years > 0 {
                terms.repayment = RepaymentType::InterestOnly { years: args.interest_only_years };
            }
            terms.include_lmi = args.include_lmi;
            Some(terms)
        }
        _ => None,
    };

    let scenario = Scenario {
        buyer,
        property,
        loan,
        upfront_fees: UpfrontFees::default(),
        ongoing_fees: OngoingFees::default(),
    };

    let summary = calculate_costs(&scenario);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
