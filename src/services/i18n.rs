use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Some(Lang::En),
            "es" | "es-mx" | "es-es" | "spanish" | "español" => Some(Lang::Es),
            _ => None,
        }
    }

    pub fn parse_or(s: Option<&str>, fallback: Lang) -> Self {
        s.and_then(Lang::parse).unwrap_or(fallback)
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("label.service", "Service"),
    ("label.date", "Date"),
    ("label.time", "Time"),
    ("label.name", "Name"),
    ("label.phone", "Phone"),
    ("label.email", "Email"),
    ("label.notes", "Notes"),
    ("label.deposit", "Deposit"),
    ("label.reference", "Reference"),
    ("label.card", "Card"),
    ("label.amount", "Amount"),
    ("label.from", "From"),
    ("label.to", "To"),
    ("label.message", "Message"),
    ("label.total", "Estimated total"),
    ("label.design", "Design"),
    ("label.image", "Photo"),
    ("wa.booking.header", "💅 *New Booking Request*"),
    ("wa.booking.footer", "Please confirm my appointment. The deposit will be settled at the salon."),
    ("wa.inquiry.header", "👋 *New Inquiry*"),
    ("wa.quote.header", "🧾 *Price Quote Request*"),
    ("wa.gift.header", "🎁 *Gift Card Purchase*"),
    ("wa.design.header", "✨ *I love this design!*"),
    ("wa.design.body", "Can I book this look?"),
    ("wa.referral.body", "I love my nails from {business}! Use my code {code} for 15% off your first visit."),
    ("wa.chat.handoff", "Hi! I was chatting on your website and would like to talk to someone."),
    ("notify.booking.title", "Booking request sent"),
    ("notify.booking.body", "We'll confirm your {service} on {date} at {time} over WhatsApp."),
    ("notify.deposit.title", "Deposit reminder"),
    ("notify.deposit.body", "Your ${deposit} deposit is due at the salon."),
    ("chat.greeting", "Hi there! 💅 Ask me about prices, hours, services or gift cards."),
    ("chat.hours", "We're open Monday to Saturday, 9 AM to 5 PM. Closed on Sundays."),
    ("chat.prices", "Manicures start at $25, gel at $40 and full acrylic sets at $55. Use the price calculator for an estimate!"),
    ("chat.booking", "You can book right here on the site, or tap below to message us on WhatsApp."),
    ("chat.location", "You'll find us downtown; we send the exact address with your confirmation."),
    ("chat.gel", "Gel manicures last up to three weeks without chipping and take about 45 minutes."),
    ("chat.acrylic", "Acrylic full sets take about 75 minutes and can be any length or shape."),
    ("chat.pedicure", "Our spa pedicure includes a soak, scrub, mask, hot towels and polish."),
    ("chat.gift", "Gift cards come in $25, $50, $100 and $200 tiers, or any custom amount."),
    ("chat.fallback", "I'm not sure about that one. Tap below to ask the team on WhatsApp!"),
];

const SPANISH: &[(&str, &str)] = &[
    ("label.service", "Servicio"),
    ("label.date", "Fecha"),
    ("label.time", "Hora"),
    ("label.name", "Nombre"),
    ("label.phone", "Teléfono"),
    ("label.email", "Correo"),
    ("label.notes", "Notas"),
    ("label.deposit", "Depósito"),
    ("label.reference", "Referencia"),
    ("label.card", "Tarjeta"),
    ("label.amount", "Monto"),
    ("label.from", "De"),
    ("label.to", "Para"),
    ("label.message", "Mensaje"),
    ("label.total", "Total estimado"),
    ("label.design", "Diseño"),
    ("label.image", "Foto"),
    ("wa.booking.header", "💅 *Nueva Solicitud de Cita*"),
    ("wa.booking.footer", "Por favor confirmen mi cita. El depósito se paga en el salón."),
    ("wa.inquiry.header", "👋 *Nueva Consulta*"),
    ("wa.quote.header", "🧾 *Solicitud de Cotización*"),
    ("wa.gift.header", "🎁 *Compra de Tarjeta de Regalo*"),
    ("wa.design.header", "✨ *¡Me encanta este diseño!*"),
    ("wa.design.body", "¿Puedo reservar este look?"),
    ("wa.referral.body", "¡Me encantan mis uñas de {business}! Usa mi código {code} para 15% de descuento en tu primera visita."),
    ("wa.chat.handoff", "¡Hola! Estaba chateando en su sitio web y me gustaría hablar con alguien."),
    ("notify.booking.title", "Solicitud enviada"),
    ("notify.booking.body", "Confirmaremos tu {service} el {date} a las {time} por WhatsApp."),
    ("notify.deposit.title", "Recordatorio de depósito"),
    ("notify.deposit.body", "Tu depósito de ${deposit} se paga en el salón."),
    ("chat.greeting", "¡Hola! 💅 Pregúntame por precios, horarios, servicios o tarjetas de regalo."),
    ("chat.hours", "Abrimos de lunes a sábado, de 9 AM a 5 PM. Cerramos los domingos."),
    ("chat.prices", "Las manicuras empiezan en $25, el gel en $40 y los juegos completos de acrílico en $55. ¡Usa la calculadora de precios para un estimado!"),
    ("chat.booking", "Puedes reservar aquí mismo o tocar abajo para escribirnos por WhatsApp."),
    ("chat.location", "Estamos en el centro; te enviamos la dirección exacta con tu confirmación."),
    ("chat.gel", "La manicura de gel dura hasta tres semanas sin descascararse y toma unos 45 minutos."),
    ("chat.acrylic", "Los juegos completos de acrílico toman unos 75 minutos y pueden tener cualquier largo o forma."),
    ("chat.pedicure", "Nuestra pedicura spa incluye remojo, exfoliación, mascarilla, toallas calientes y esmalte."),
    ("chat.gift", "Las tarjetas de regalo vienen en $25, $50, $100 y $200, o cualquier monto personalizado."),
    ("chat.fallback", "No estoy segura de eso. ¡Toca abajo para preguntarle al equipo por WhatsApp!"),
];

fn table(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => ENGLISH,
        Lang::Es => SPANISH,
    }
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    table(lang).iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Falls back to English, then to the key itself.
pub fn translate(lang: Lang, key: &str) -> String {
    if let Some(value) = lookup(lang, key) {
        return value.to_string();
    }
    if let Some(value) = lookup(Lang::En, key) {
        if lang != Lang::En {
            tracing::debug!(lang = lang.as_str(), key, "translation missing, using english");
        }
        return value.to_string();
    }
    tracing::warn!(lang = lang.as_str(), key, "missing translation key");
    key.to_string()
}

/// `translate` followed by `{name}` substitution.
pub fn translate_with(lang: Lang, key: &str, vars: &[(&str, &str)]) -> String {
    let mut text = translate(lang, key);
    for (name, value) in vars {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}
