//! Canned console copy: intro banner, command responses and link targets.

use super::command::CommandId;
use super::navigator::Effect;
use crate::locale::Locale;

pub const SITE_NAME: &str = "lucasvicente.es";
pub const GITHUB_URL: &str = "https://github.com/lucksgg7";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/lucas-esteban-vicente-cerri-3073a8330/";

/// Prefix marking an echoed user input line.
pub const ECHO_PREFIX: &str = "$ ";

const BANNER_ES: &[&str] = &[
    "Bienvenido a la consola de lucasvicente.es",
    "Escribe \"ayuda\" para ver los comandos disponibles.",
    "",
];

const BANNER_EN: &[&str] = &[
    "Welcome to the lucasvicente.es console",
    "Type \"help\" to list the available commands.",
    "",
];

/// Introductory banner shown on a fresh or cleared console.
pub fn banner(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::Es => BANNER_ES,
        Locale::En => BANNER_EN,
    }
}

/// Banner as owned history lines.
pub fn banner_lines(locale: Locale) -> Vec<String> {
    banner(locale).iter().map(|l| l.to_string()).collect()
}

/// The echo line committed for a submitted input.
pub fn echo(input: &str) -> String {
    format!("{}{}", ECHO_PREFIX, input)
}

/// Message for input that resolved to nothing.
pub fn unknown(input: &str, locale: Locale) -> String {
    match locale {
        Locale::Es => format!("Comando no reconocido: {}. Usa \"ayuda\".", input),
        Locale::En => format!("Unknown command: {}. Use \"help\".", input),
    }
}

/// Ordered response lines for a command. `Clear` has none.
pub fn response(command: CommandId, locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::Es => response_es(command),
        Locale::En => response_en(command),
    }
}

fn response_es(command: CommandId) -> &'static [&'static str] {
    match command {
        CommandId::Help => &[
            "Comandos: ayuda, sobre-mi, proyectos, stack, contacto, contratar",
            "Mas: precios, cv, github, linkedin, limpiar. Tambien puedes preguntar.",
        ],
        CommandId::Greeting => &[
            "¡Hola! Soy Lucas, encantado de verte por aqui.",
            "Prueba \"proyectos\" o preguntame lo que quieras.",
        ],
        CommandId::About => &[
            "Lucas Vicente (@lucksgg7), desarrollador web en Madrid.",
            "Construyo productos web con foco en experiencia, rendimiento y detalle visual.",
            "Trabajo a diario con React, TypeScript y Tailwind.",
        ],
        CommandId::Hire => &[
            "Disponible para proyectos freelance y colaboraciones.",
            "Cuentame tu idea: \"contacto\" abre mis perfiles.",
        ],
        CommandId::Pricing => &[
            "Cada proyecto se presupuesta segun alcance y plazos.",
            "Landing pages, webs corporativas y aplicaciones React a medida.",
            "Escribe \"contacto\" y preparamos un presupuesto sin compromiso.",
        ],
        CommandId::Contact => &[
            "LinkedIn: https://www.linkedin.com/in/lucas-esteban-vicente-cerri-3073a8330/",
            "GitHub:   https://github.com/lucksgg7",
            "Abriendo enlaces...",
        ],
        CommandId::Projects => &[
            "MadridDigital-Lucas  trabajo tecnico orientado a web",
            "ServerMappings       mapeo y estructura para entornos de servidor",
            "lucksgg7             perfil y presencia publica de GitHub",
        ],
        CommandId::Stack => &[
            "Frontend: React, TypeScript, Tailwind CSS",
            "Visual: shaders WebGL y animacion de interfaces",
            "Herramientas: Vite, Git, Cloudflare Workers",
        ],
        CommandId::Cv => &[
            "Desarrollo web y proyectos propios publicados en GitHub.",
            "CV completo bajo peticion por LinkedIn.",
        ],
        CommandId::Github => &["Abriendo github.com/lucksgg7..."],
        CommandId::Linkedin => &["Abriendo LinkedIn..."],
        CommandId::Thanks => &["¡A ti! Si necesitas algo, escribe \"ayuda\"."],
        CommandId::Clear => &[],
    }
}

fn response_en(command: CommandId) -> &'static [&'static str] {
    match command {
        CommandId::Help => &[
            "Commands: help, about, projects, stack, contact, hire",
            "More: pricing, cv, github, linkedin, clear. Or just ask in plain words.",
        ],
        CommandId::Greeting => &[
            "Hi! I'm Lucas, glad you stopped by.",
            "Try \"projects\" or ask me anything.",
        ],
        CommandId::About => &[
            "Lucas Vicente (@lucksgg7), web developer in Madrid.",
            "I build web products focused on experience, performance and visual detail.",
            "Day to day I work with React, TypeScript and Tailwind.",
        ],
        CommandId::Hire => &[
            "Available for freelance projects and collaborations.",
            "Tell me about your idea: \"contact\" opens my profiles.",
        ],
        CommandId::Pricing => &[
            "Every project is quoted by scope and timeline.",
            "Landing pages, company sites and custom React applications.",
            "Type \"contact\" and we'll put together a no-strings quote.",
        ],
        CommandId::Contact => &[
            "LinkedIn: https://www.linkedin.com/in/lucas-esteban-vicente-cerri-3073a8330/",
            "GitHub:   https://github.com/lucksgg7",
            "Opening links...",
        ],
        CommandId::Projects => &[
            "MadridDigital-Lucas  technical web-focused work",
            "ServerMappings       mapping and structure for server environments",
            "lucksgg7             GitHub profile and public presence",
        ],
        CommandId::Stack => &[
            "Frontend: React, TypeScript, Tailwind CSS",
            "Visual: WebGL shaders and interface animation",
            "Tooling: Vite, Git, Cloudflare Workers",
        ],
        CommandId::Cv => &[
            "Web development and personal projects published on GitHub.",
            "Full CV available on request through LinkedIn.",
        ],
        CommandId::Github => &["Opening github.com/lucksgg7..."],
        CommandId::Linkedin => &["Opening LinkedIn..."],
        CommandId::Thanks => &["Anytime! Type \"help\" if you need anything."],
        CommandId::Clear => &[],
    }
}

/// Out-of-band navigation effects fired when a command runs.
pub fn effects(command: CommandId) -> &'static [Effect] {
    match command {
        CommandId::Github => &[Effect::OpenUrl(GITHUB_URL)],
        CommandId::Linkedin => &[Effect::OpenUrl(LINKEDIN_URL)],
        CommandId::Contact => &[Effect::OpenUrl(LINKEDIN_URL), Effect::OpenUrl(GITHUB_URL)],
        CommandId::Projects => &[Effect::Anchor("proyectos")],
        CommandId::Stack => &[Effect::Anchor("stack")],
        CommandId::Hire | CommandId::Pricing => &[Effect::Anchor("contacto")],
        CommandId::About => &[Effect::Anchor("inicio")],
        CommandId::Cv => &[Effect::Anchor("cv")],
        CommandId::Help | CommandId::Greeting | CommandId::Thanks | CommandId::Clear => &[],
    }
}
