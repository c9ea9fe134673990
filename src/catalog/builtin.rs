//! Built-in technology and social icons.
//!
//! Built-ins render as small colored badges; drop an `icons/<name>.svg` file
//! next to `folio.toml` to replace one with real artwork.

/// `(keys, label, background)`. The first key is canonical, the rest are aliases.
/// Keys are already normalized.
pub(super) const BADGES: &[(&[&str], &str, &str)] = &[
    // languages and runtimes
    (&["typescript", "ts"], "TS", "#3178C6"),
    (&["javascript", "js"], "JS", "#F7DF1E"),
    (&["html", "html5"], "H5", "#E34F26"),
    (&["css", "css3"], "C3", "#1572B6"),
    (&["php"], "php", "#777BB4"),
    (&["java"], "Jv", "#ED8B00"),
    (&["nodejs", "node"], "No", "#5FA04E"),
    (&["bun"], "Bun", "#FBF0DF"),
    // frameworks
    (&["react", "reacticon", "reactjs"], "Re", "#61DAFB"),
    (&["nextjs", "next"], "N", "#000000"),
    (&["express", "expressjs"], "Ex", "#000000"),
    (&["tailwindcss", "tailwind"], "Tw", "#06B6D4"),
    (&["bootstrap"], "B", "#7952B3"),
    (&["shadcn", "shadcnui"], "sh", "#000000"),
    // data
    (&["postgresql", "postgres"], "Pg", "#4169E1"),
    (&["mongodb", "mongo"], "Mg", "#47A248"),
    (&["mysql"], "My", "#4479A1"),
    (&["prisma"], "Pr", "#2D3748"),
    // tools and services
    (&["figma"], "Fi", "#F24E1E"),
    (&["vercel"], "▲", "#000000"),
    (&["netbeans"], "NB", "#1B6AC6"),
    (&["postman"], "Pm", "#FF6C37"),
    (&["razorpay"], "Rz", "#0C2451"),
    (&["recaptcha"], "rC", "#4285F4"),
    (&["gmail", "gmailapi"], "Gm", "#EA4335"),
    (&["aws", "amazonwebservices"], "aws", "#232F3E"),
    // socials and actions
    (&["x", "twitter"], "X", "#000000"),
    (&["linkedin"], "in", "#0A66C2"),
    (&["github"], "GH", "#181717"),
    (&["email", "mail"], "@", "#EA4335"),
    (&["cv", "resume"], "CV", "#52525B"),
    (&["chat", "contact"], "💬", "#52525B"),
];
