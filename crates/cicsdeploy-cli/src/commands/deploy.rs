//! Deploy and check commands.

use super::args::DeployArgs;
use anyhow::{Context, Result};
use cicsdeploy_config::{PlaintextDecrypter, Settings};
use cicsdeploy_deployer::{
    DeployDispatcher, DeploymentPlan, HttpBundleDeployer, deploy_bundle, plan_deployment,
};

/// Deploy a bundle through the bundle deployment API.
pub async fn run(settings: &Settings, args: &DeployArgs) -> Result<()> {
    let deployer = HttpBundleDeployer::new().context("Failed to create HTTP client")?;
    let dispatcher = DeployDispatcher::new(deployer);

    let plan = deploy_bundle(
        &args.options(),
        settings,
        &PlaintextDecrypter,
        &args.artifacts(),
        &dispatcher,
    )
    .await?;

    println!(
        "✓ Deployed {} as {} to {}/{}",
        plan.bundle.display(),
        plan.bunddef,
        plan.server.cicsplex.as_deref().unwrap_or_default(),
        plan.server.region.as_deref().unwrap_or_default(),
    );
    Ok(())
}

/// Resolve, validate and select without deploying.
pub fn check(settings: &Settings, args: &DeployArgs, json: bool) -> Result<()> {
    let plan = plan_deployment(
        &args.options(),
        settings,
        &PlaintextDecrypter,
        &args.artifacts(),
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

fn print_plan(plan: &DeploymentPlan) {
    let or_none = |value: Option<&str>| value.unwrap_or("(none)").to_string();

    println!("Configuration is valid");
    println!(
        "  URL:       {}",
        or_none(plan.server.endpoint_url.as_ref().map(|u| u.as_str()))
    );
    println!("  CICSplex:  {}", or_none(plan.server.cicsplex.as_deref()));
    println!("  Region:    {}", or_none(plan.server.region.as_deref()));
    println!("  Username:  {}", or_none(plan.server.username.as_deref()));
    println!(
        "  Password:  {}",
        if plan.server.password.is_some() { "(set)" } else { "(none)" }
    );
    println!("  Bundle:    {}", plan.bundle.display());
    println!("  BUNDDEF:   {}", plan.bunddef);
    println!("  CSD group: {}", plan.csdgroup);
}
