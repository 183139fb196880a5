use async_trait::async_trait;
use serde::Serialize;

use business::domain::order::errors::NotificationError;
use business::domain::order::model::Order;
use business::domain::order::services::OrderNotifier;

use crate::client::ResendClient;

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: String,
    html: String,
}

/// Emails every new order to the restaurant's inbox.
pub struct OrderEmailNotifier {
    client: ResendClient,
    from: String,
    to: Vec<String>,
}

impl OrderEmailNotifier {
    pub fn new(client: ResendClient, from: String, to: Vec<String>) -> Self {
        Self { client, from, to }
    }

    fn subject(order: &Order) -> String {
        format!(
            "New Order from {} - {}",
            order.customer_name.trim(),
            order.total
        )
    }

    fn body(order: &Order) -> String {
        let rows: String = order
            .items
            .iter()
            .map(|line| {
                format!(
                    r#"<tr style="border-bottom: 1px solid #eee;">
<td style="padding: 12px; text-align: left;">{}</td>
<td style="padding: 12px; text-align: center;">{}</td>
<td style="padding: 12px; text-align: right;">{}</td>
<td style="padding: 12px; text-align: right;">{}</td>
</tr>"#,
                    escape_html(&line.name),
                    line.quantity,
                    line.price,
                    line.line_total()
                )
            })
            .collect();

        let instructions = order
            .special_instructions
            .as_deref()
            .map(|notes| {
                format!(
                    "<p><strong>Special Instructions:</strong> {}</p>",
                    escape_html(notes)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>New Order - Braai &amp; Grill</title></head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
<div style="max-width: 600px; margin: 0 auto; padding: 20px;">
<h1 style="color: #d97706; text-align: center;">New Order Received!</h1>
<div style="background: #f9fafb; padding: 20px; border-radius: 8px;">
<h2>Customer Details</h2>
<p><strong>Name:</strong> {name}</p>
<p><strong>Phone:</strong> {phone}</p>
<p><strong>Address:</strong> {address}</p>
<p><strong>Payment Method:</strong> {payment}</p>
{instructions}
</div>
<h2>Order Items</h2>
<table style="width: 100%; border-collapse: collapse;">
<thead><tr><th>Item</th><th>Qty</th><th>Price</th><th>Total</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>
<div style="background: #d97706; color: white; padding: 20px; border-radius: 8px; text-align: center;">
<h3 style="margin: 0;">Order Total: {total}</h3>
</div>
<p style="text-align: center; color: #92400e;"><strong>Order {id}</strong></p>
</div>
</body>
</html>"#,
            name = escape_html(&order.customer_name),
            phone = escape_html(&order.customer_phone),
            address = escape_html(&order.customer_address),
            payment = order.payment_method.label(),
            instructions = instructions,
            rows = rows,
            total = order.total,
            id = order.id,
        )
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[async_trait]
impl OrderNotifier for OrderEmailNotifier {
    async fn notify(&self, order: &Order) -> Result<(), NotificationError> {
        let body = SendEmailRequest {
            from: &self.from,
            to: &self.to,
            subject: Self::subject(order),
            html: Self::body(order),
        };

        let response = self
            .client
            .client
            .post(self.client.emails_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| NotificationError::Unavailable)?;

        if !response.status().is_success() {
            return Err(NotificationError::Rejected(response.status().as_u16()));
        }

        Ok(())
    }
}
