use std::sync::Arc;

use chrono::{DateTime, Utc};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;

use crate::core::config::NotificationConfig;
use crate::features::accounts::models::User;
use crate::features::marketplace::models::{AdType, AdVillage};

/// What happened to a listing to put it back in the moderation queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingAction {
    Created,
    Updated,
}

/// Payload of a listing moderation notification
#[derive(Debug, Clone)]
pub struct ListingEvent {
    pub action: ListingAction,
    pub id: Uuid,
    pub title: String,
    pub author_username: String,
    pub author_email: String,
    pub ad_type: AdType,
    pub village: AdVillage,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Payload of a new user registration notification
#[derive(Debug, Clone)]
pub struct NewUserEvent {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub village_label: String,
    pub registered_at: DateTime<Utc>,
}

impl NewUserEvent {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            village_label: user
                .village
                .map(|v| v.display_name().to_string())
                .unwrap_or_else(|| "Не указан".to_string()),
            registered_at: user.created_at,
        }
    }
}

/// Sends admin notifications over email and Telegram.
/// Both channels are optional; unconfigured ones are skipped with a debug log.
pub struct AdminNotifier {
    config: NotificationConfig,
    http: reqwest::Client,
    mailer: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl AdminNotifier {
    pub fn new(config: NotificationConfig) -> Self {
        let mailer = match (&config.smtp_host, config.email_enabled()) {
            (Some(host), true) => match Self::build_mailer(host, &config) {
                Ok(transport) => Some(transport),
                Err(e) => {
                    tracing::warn!("Email notifications disabled, SMTP setup failed: {}", e);
                    None
                }
            },
            _ => None,
        };

        Self {
            config,
            http: reqwest::Client::new(),
            mailer,
        }
    }

    fn build_mailer(
        host: &str,
        config: &NotificationConfig,
    ) -> anyhow::Result<AsyncSmtpTransport<Tokio1Executor>> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?.port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(builder.build())
    }

    /// Queue a moderation notification; returns immediately
    pub fn dispatch_listing(self: &Arc<Self>, event: ListingEvent) {
        let notifier = Arc::clone(self);
        tokio::spawn(async move {
            notifier.send_listing(&event).await;
        });
    }

    /// Queue a new-user notification; returns immediately
    pub fn dispatch_new_user(self: &Arc<Self>, event: NewUserEvent) {
        let notifier = Arc::clone(self);
        tokio::spawn(async move {
            notifier.send_new_user(&event).await;
        });
    }

    async fn send_listing(&self, event: &ListingEvent) {
        let (subject, body) = listing_email(event, &self.config.admin_base_url);
        self.deliver(&subject, &body, &listing_telegram_text(event, &self.config.admin_base_url))
            .await;
    }

    async fn send_new_user(&self, event: &NewUserEvent) {
        let (subject, body) = new_user_email(event, &self.config.admin_base_url);
        self.deliver(&subject, &body, &new_user_telegram_text(event))
            .await;
    }

    /// Push one message through every configured channel, swallowing failures
    async fn deliver(&self, subject: &str, email_body: &str, telegram_text: &str) {
        if self.mailer.is_none() && !self.config.telegram_enabled() {
            tracing::debug!("No notification channels configured, skipping: {}", subject);
            return;
        }

        if let Err(e) = self.send_email(subject, email_body).await {
            tracing::warn!("Failed to send admin email '{}': {}", subject, e);
        }

        if let Err(e) = self.send_telegram(telegram_text).await {
            tracing::warn!("Failed to send Telegram notification: {}", e);
        }
    }

    async fn send_email(&self, subject: &str, body: &str) -> anyhow::Result<()> {
        let Some(mailer) = &self.mailer else {
            return Ok(());
        };

        let from: Mailbox = self.config.from_email.parse()?;

        for recipient in &self.config.admin_emails {
            let to: Mailbox = recipient.parse()?;
            let message = Message::builder()
                .from(from.clone())
                .to(to)
                .subject(subject)
                .body(body.to_string())?;

            mailer.send(message).await?;
        }

        tracing::info!(
            "Admin email '{}' sent to {} recipient(s)",
            subject,
            self.config.admin_emails.len()
        );

        Ok(())
    }

    async fn send_telegram(&self, text: &str) -> anyhow::Result<()> {
        let (Some(bot_token), Some(chat_id)) = (
            &self.config.telegram_bot_token,
            &self.config.telegram_chat_id,
        ) else {
            return Ok(());
        };

        let url = format!("https://api.telegram.org/bot{}/sendMessage", bot_token);
        let response = self
            .http
            .post(&url)
            .form(&[("chat_id", chat_id.as_str()), ("text", text)])
            .timeout(std::time::Duration::from_secs(5))
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Telegram API returned HTTP {}", response.status());
        }

        tracing::info!("Telegram notification sent");
        Ok(())
    }
}

fn ad_type_emoji(ad_type: AdType) -> &'static str {
    match ad_type {
        AdType::Sale => "💰",
        AdType::Buy => "🛒",
        AdType::Rent => "🏠",
        AdType::Free => "🎁",
        AdType::Handmade => "📄",
    }
}

fn moderation_link(base_url: &str, id: Uuid) -> String {
    format!("{}/admin/marketplace/advertisements/{}", base_url, id)
}

fn listing_email(event: &ListingEvent, base_url: &str) -> (String, String) {
    let subject = match event.action {
        ListingAction::Created => "Новое объявление на модерацию".to_string(),
        ListingAction::Updated => {
            "Объявление отредактировано, требуется повторная модерация".to_string()
        }
    };

    let body = format!(
        "Объявление: {title}\n\
         Автор: {author} ({email})\n\
         Тип: {ad_type}\n\
         Населённый пункт: {village}\n\
         Телефон: {phone}\n\
         Дата: {date}\n\n\
         Ссылка для модерации:\n{link}",
        title = event.title,
        author = event.author_username,
        email = event.author_email,
        ad_type = event.ad_type.display_name(),
        village = event.village.display_name(),
        phone = if event.phone.is_empty() {
            "Не указан"
        } else {
            &event.phone
        },
        date = event.created_at.format("%d.%m.%Y %H:%M"),
        link = moderation_link(base_url, event.id),
    );

    (subject, body)
}

fn listing_telegram_text(event: &ListingEvent, base_url: &str) -> String {
    let status_emoji = match event.action {
        ListingAction::Created => "🆕",
        ListingAction::Updated => "✏️",
    };

    format!(
        "{status} Требуется модерация!\n\n\
         {type_emoji} {ad_type}\n\
         🏘️ {village}\n\
         👤 {author}\n\
         📱 {phone}\n\n\
         «{title}»\n\n\
         🔗 {link}",
        status = status_emoji,
        type_emoji = ad_type_emoji(event.ad_type),
        ad_type = event.ad_type.display_name(),
        village = event.village.display_name(),
        author = event.author_username,
        phone = if event.phone.is_empty() {
            "нет телефона"
        } else {
            &event.phone
        },
        title = event.title,
        link = moderation_link(base_url, event.id),
    )
}

fn new_user_email(event: &NewUserEvent, base_url: &str) -> (String, String) {
    let subject = format!("🆕 Новый пользователь зарегистрирован: {}", event.username);

    let body = format!(
        "Имя пользователя: {username}\n\
         Email: {email}\n\
         Имя: {first}\n\
         Фамилия: {last}\n\
         Телефон: {phone}\n\
         Населённый пункт: {village}\n\n\
         Дата регистрации: {date}\n\n\
         Ссылка для просмотра:\n{base}/admin/accounts/users/{id}",
        username = event.username,
        email = event.email,
        first = if event.first_name.is_empty() {
            "Не указано"
        } else {
            &event.first_name
        },
        last = if event.last_name.is_empty() {
            "Не указано"
        } else {
            &event.last_name
        },
        phone = if event.phone.is_empty() {
            "Не указан"
        } else {
            &event.phone
        },
        village = event.village_label,
        date = event.registered_at.format("%d.%m.%Y %H:%M"),
        base = base_url,
        id = event.id,
    );

    (subject, body)
}

fn new_user_telegram_text(event: &NewUserEvent) -> String {
    format!(
        "🆕 Новый пользователь: {username}\n\
         ✉️ {email}\n\
         🏘️ {village}",
        username = event.username,
        email = event.email,
        village = event.village_label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_listing_event(action: ListingAction) -> ListingEvent {
        ListingEvent {
            action,
            id: Uuid::nil(),
            title: "Продам велосипед".to_string(),
            author_username: "ivan".to_string(),
            author_email: "ivan@example.com".to_string(),
            ad_type: AdType::Sale,
            village: AdVillage::Bunyakovo,
            phone: "+7 (903) 123-45-67".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_listing_email_contains_summary_fields() {
        let (subject, body) =
            listing_email(&sample_listing_event(ListingAction::Created), "http://admin.local");

        assert_eq!(subject, "Новое объявление на модерацию");
        assert!(body.contains("Продам велосипед"));
        assert!(body.contains("ivan (ivan@example.com)"));
        assert!(body.contains("Тип: Продам"));
        assert!(body.contains("Населённый пункт: Буняково"));
        assert!(body.contains("01.06.2025 12:30"));
        assert!(body.contains(
            "http://admin.local/admin/marketplace/advertisements/00000000-0000-0000-0000-000000000000"
        ));
    }

    #[test]
    fn test_updated_listing_gets_repeat_moderation_subject() {
        let (subject, _) =
            listing_email(&sample_listing_event(ListingAction::Updated), "http://admin.local");
        assert!(subject.contains("повторная модерация"));
    }

    #[test]
    fn test_listing_telegram_text_marks_action() {
        let created = listing_telegram_text(
            &sample_listing_event(ListingAction::Created),
            "http://admin.local",
        );
        assert!(created.starts_with("🆕"));

        let updated = listing_telegram_text(
            &sample_listing_event(ListingAction::Updated),
            "http://admin.local",
        );
        assert!(updated.starts_with("✏️"));
        assert!(updated.contains("«Продам велосипед»"));
    }

    #[test]
    fn test_listing_telegram_text_handles_missing_phone() {
        let mut event = sample_listing_event(ListingAction::Created);
        event.phone.clear();
        let text = listing_telegram_text(&event, "http://admin.local");
        assert!(text.contains("нет телефона"));
    }

    #[test]
    fn test_new_user_email_fills_blanks() {
        let event = NewUserEvent {
            id: Uuid::nil(),
            username: "new_resident".to_string(),
            email: "new@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            village_label: "Рябцево".to_string(),
            registered_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
        };

        let (subject, body) = new_user_email(&event, "http://admin.local");
        assert!(subject.contains("new_resident"));
        assert!(body.contains("Имя: Не указано"));
        assert!(body.contains("Телефон: Не указан"));
        assert!(body.contains("Населённый пункт: Рябцево"));
    }

    #[test]
    fn test_unconfigured_notifier_is_a_noop() {
        let notifier = AdminNotifier::new(NotificationConfig {
            admin_emails: vec![],
            smtp_host: None,
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            from_email: "noreply@selo-portal.local".to_string(),
            telegram_bot_token: None,
            telegram_chat_id: None,
            admin_base_url: "http://localhost:3000".to_string(),
        });

        // Both channels disabled: deliver must return without error
        tokio_test::block_on(notifier.deliver("subject", "body", "text"));
    }
}
