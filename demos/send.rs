//! Sends one message in sandbox mode.
//!
//! ```text
//! SENDGRID_API_KEY=SG.xxx cargo run --example send -- alice@example.com bob@example.com
//! ```

use sendgrid_client::{Client, Email, Mail, MailSettings, Personalization, Setting};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), sendgrid_client::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let from = args.next().unwrap_or_else(|| "sender@example.com".to_string());
    let to = args.next().unwrap_or_else(|| "recipient@example.com".to_string());

    let client = Client::from_env()?;

    let mut personalization = Personalization::new();
    personalization
        .add_tos([Email::parse(&to)?])
        .set_substitution("-greeting-", "Hello");

    let mut mail = Mail::new();
    mail.set_from(Email::parse(&from)?)
        .set_subject("sendgrid-client demo")
        .add_personalizations([personalization])
        .set_text_content("-greeting- from the demo.")
        .set_html_content("<p>-greeting- from the demo.</p>")
        .set_mail_settings(MailSettings::new().set_sandbox_mode(Setting::new(true)));

    let response = client.send(&mail).await?;
    println!("Status: {}", response.status_code);
    if !response.raw_body.is_empty() {
        println!("{}", String::from_utf8_lossy(&response.raw_body));
    }

    Ok(())
}
