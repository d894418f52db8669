use eyre::Result;

use mindcare_client::services::{auth, user};
use mindcare_core::models::auth::{LoginRequest, RegisterRequest};

use super::Context;

#[derive(Debug, clap::Args)]
pub struct Login {
    #[arg(long)]
    email: String,

    #[arg(long, env = "MINDCARE_PASSWORD", hide_env_values = true)]
    password: String,
}

impl Login {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = ctx.client()?;
        let request = LoginRequest {
            email: self.email,
            password: self.password,
        };
        let data = auth::login(&client, &request).await?;
        println!("Signed in as {} ({}).", data.name, data.email);
        Ok(())
    }
}

#[derive(Debug, clap::Args)]
pub struct Register {
    #[arg(long)]
    email: String,

    #[arg(long, env = "MINDCARE_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    department: String,

    #[arg(long, default_value = "")]
    year: String,
}

impl Register {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = ctx.client()?;
        let request = RegisterRequest {
            email: self.email,
            password: self.password,
            name: self.name,
            department: self.department,
            year: self.year,
        };
        let data = auth::register(&client, &request).await?;
        println!("Welcome, {}! Your account is ready.", display_name(&data.name, &data.email));
        Ok(())
    }
}

pub fn logout(ctx: &Context) -> Result<()> {
    auth::logout(&ctx.client()?)?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    if !auth::is_authenticated(&client)? {
        println!("Not signed in.");
        return Ok(());
    }

    let profile = user::get_profile(&client).await?;
    auth::update_cached_user(&client, &profile)?;

    let name = profile.name.as_deref().unwrap_or_default();
    println!("{} <{}>", display_name(name, &profile.email), profile.email);
    if let Some(role) = &profile.role {
        println!("role: {role}");
    }
    if let Some(department) = profile.department.as_deref().filter(|d| !d.is_empty()) {
        println!("department: {department}");
    }
    if let Some(year) = profile.year.as_deref().filter(|y| !y.is_empty()) {
        println!("year: {year}");
    }
    Ok(())
}

fn display_name<'a>(name: &'a str, email: &'a str) -> &'a str {
    if name.is_empty() { email } else { name }
}
