//! Sign in.

use anyhow::Result;
use dialoguer::{Input, Password};
use storefront_auth::{AuthMode, Authenticator, Credentials, SocialProvider};
use storefront_commerce::store::Action;

use super::LoginArgs;
use crate::context::Context;

/// Run the login command.
pub async fn run(args: LoginArgs, ctx: &Context) -> Result<()> {
    let auth = ctx.authenticator();

    let session = if let Some(provider) = args.provider.as_deref() {
        let provider: SocialProvider = provider.parse()?;
        ctx.output.debug(provider.label());
        auth.social_login(provider).await?
    } else {
        let mode = if args.signup {
            AuthMode::Signup
        } else {
            AuthMode::Login
        };
        ctx.output.header(mode.heading());

        let mut credentials = Credentials::new(
            prompt_if_missing(args.email, "Email")?,
            match args.password {
                Some(password) => password,
                None => Password::new().with_prompt("Password").interact()?,
            },
        );
        if mode == AuthMode::Signup {
            credentials = credentials.with_name(prompt_if_missing(args.name, "Full name")?);
        } else if let Some(name) = args.name {
            credentials = credentials.with_name(name);
        }
        if let Some(phone) = args.phone {
            credentials = credentials.with_phone(phone);
        }

        // Fail fast before the simulated wait
        credentials.validate(mode)?;

        let spinner = ctx.output.spinner("Signing in...");
        let result = auth.authenticate(mode, &credentials).await;
        spinner.finish_and_clear();
        result?
    };

    ctx.logger
        .info_builder("signed in")
        .field("email", session.user.email.as_str())
        .field("session", session.id.as_str())
        .emit();

    // The store greets the customer the same way the header does
    let mut store = ctx.store()?;
    let greeting = store.dispatch(Action::SignIn {
        customer: session.user.to_customer(),
    })?;

    if ctx.output.is_json() {
        ctx.output.json(&session);
        return Ok(());
    }

    if let Some(note) = greeting {
        ctx.output.notification(&note);
    }
    ctx.output.kv("Email", &session.user.email);
    ctx.output.kv("Session", session.id.as_str());
    ctx.output.kv(
        "Expires",
        &session.expires_at.format("%d %b %Y %H:%M UTC").to_string(),
    );

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
    }
}
