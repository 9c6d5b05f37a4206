//! Static catalogue of categories and the tools under each.
//!
//! Pages render their tab bars from these tables and the home page renders
//! its category cards from them, so a tool id is defined in one place.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolInfo {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    pub tools: &'static [ToolInfo],
}

impl CategoryInfo {
    #[must_use]
    pub fn tool(&self, id: &str) -> Option<&'static ToolInfo> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// First tool, used as the default tab.
    #[must_use]
    pub fn first_tool(&self) -> &'static str {
        self.tools.first().map_or("", |t| t.id)
    }
}

const fn tool(id: &'static str, name: &'static str) -> ToolInfo {
    ToolInfo { id, name }
}

pub const FINANCE: CategoryInfo = CategoryInfo {
    slug: "finance",
    title: "Finance Tools",
    path: "/finance",
    summary: "EMI, Expense, Interest, SIP, Salary",
    tools: &[
        tool("expense", "Expense Tracker"),
        tool("sip", "SIP Calculator"),
        tool("lumpsum", "Lumpsum"),
        tool("emi", "EMI Calculator"),
        tool("compare-loan", "Loan Compare"),
        tool("invoice", "GST Invoice"),
        tool("salary-slip", "Salary Slip"),
        tool("emi-split", "EMI Splitter"),
        tool("simple-interest", "Simple Interest"),
        tool("compound-interest", "Compound Interest"),
        tool("savings-day", "Day Savings"),
        tool("gst", "GST"),
        tool("currency", "Converter"),
        tool("tax", "Tax Estimator"),
        tool("foreclosure", "Foreclosure"),
        tool("savings-goal", "Savings Goal"),
    ],
};

pub const STUDENT: CategoryInfo = CategoryInfo {
    slug: "student",
    title: "Student Tools",
    path: "/student",
    summary: "CGPA, Attendance, Grades, Exam Timer",
    tools: &[
        tool("internal", "Internal Marks"),
        tool("flashcard", "Flashcards"),
        tool("assignments", "Assignments"),
        tool("ideas", "Project Ideas"),
        tool("exam", "Exam Countdown"),
        tool("sgpa", "Subject SGPA"),
        tool("cgpa", "Semester CGPA"),
        tool("attendance", "Attendance"),
        tool("grade", "Grade Target"),
    ],
};

pub const PRODUCTIVITY: CategoryInfo = CategoryInfo {
    slug: "productivity",
    title: "Productivity",
    path: "/productivity",
    summary: "Todo, Pomodoro, Habits, Notes",
    tools: &[
        tool("todo", "Task Master"),
        tool("timeblock", "Time Blocking"),
        tool("pomodoro", "Pomodoro"),
        tool("goals", "Goal Planner"),
        tool("habit", "Habit Tracker"),
        tool("notes", "Daily Notes"),
    ],
};

pub const DAILY: CategoryInfo = CategoryInfo {
    slug: "daily",
    title: "Daily Life",
    path: "/daily",
    summary: "Age, BMI, Split Bill, Life Progress",
    tools: &[
        tool("age", "Age Calculator"),
        tool("date", "Date Calc"),
        tool("percent", "Percentage"),
        tool("discount", "Discount"),
        tool("bmi", "BMI Calculator"),
        tool("bill", "Split Bill"),
        tool("life", "Life Progress"),
    ],
};

pub const CONVERTERS: CategoryInfo = CategoryInfo {
    slug: "converters",
    title: "Converters",
    path: "/converters",
    summary: "Length, Weight, Speed, Currency",
    tools: &[
        tool("length", "Length"),
        tool("weight", "Weight"),
        tool("temp", "Temp"),
        tool("speed", "Speed"),
        tool("pressure", "Pressure"),
    ],
};

pub const DEVELOPER: CategoryInfo = CategoryInfo {
    slug: "developer",
    title: "Developer Tools",
    path: "/developer",
    summary: "JSON, Base64, QR, Passwords, Colors",
    tools: &[
        tool("json", "JSON <> CSV"),
        tool("base64", "Base64"),
        tool("qr", "QR Generator"),
        tool("pass", "Password"),
        tool("color", "Color Picker"),
        tool("regex", "Regex Tester"),
    ],
};

pub const PERSONAL: CategoryInfo = CategoryInfo {
    slug: "personal",
    title: "Personal Utilities",
    path: "/personal",
    summary: "Trip Cost, Electricity Bill",
    tools: &[tool("fuel", "Trip Cost"), tool("bill", "Electricity Bill")],
};

pub const AI: CategoryInfo = CategoryInfo {
    slug: "ai",
    title: "AI Assistant",
    path: "/ai",
    summary: "Writer, Email Gen, Topic Explainer",
    tools: &[
        tool("rewrite", "AI Text Rewriter"),
        tool("email", "Email Generator"),
        tool("explain", "Topic Explainer"),
        tool("resume", "Resume Bullet Points"),
    ],
};

/// Every category in home-page order.
pub const CATEGORIES: &[CategoryInfo] = &[FINANCE, STUDENT, PRODUCTIVITY, DAILY, CONVERTERS, DEVELOPER, PERSONAL, AI];

#[must_use]
pub fn category(slug: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

/// Category page hosting the tool with `id`. Matches catalog ids and the
/// `<id>-suffix` ids tool views register under.
#[must_use]
pub fn tool_path(id: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|c| {
            c.tools.iter().any(|t| id == t.id || id.strip_prefix(t.id).is_some_and(|rest| rest.starts_with('-')))
        })
        .map(|c| c.path)
}

/// Filter chips on the home page; `All` shows every category.
pub const HOME_FILTERS: &[&str] = &["All", "Finance", "Student", "Productivity", "Daily"];

/// Categories whose title or summary mentions `filter`.
#[must_use]
pub fn filter_categories(filter: &str) -> Vec<&'static CategoryInfo> {
    CATEGORIES
        .iter()
        .filter(|c| filter == "All" || c.title.contains(filter) || c.summary.contains(filter))
        .collect()
}

/// Home page shortcuts as `(tool name, path, category label)`.
pub const TRENDING_TOOLS: &[(&str, &str, &str)] = &[
    ("EMI Calculator", "/finance", "Finance"),
    ("CGPA Calculator", "/student", "Student"),
    ("AI Writer", "/ai", "AI"),
    ("Expense Tracker", "/finance", "Finance"),
    ("Age Calculator", "/daily", "Daily"),
    ("Pomodoro Timer", "/productivity", "Productivity"),
];

/// Header navigation; the dashboard entry is only shown when signed in.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Finance", "/finance"),
    ("Student", "/student"),
    ("Productivity", "/productivity"),
    ("Personal", "/personal"),
    ("Developer", "/developer"),
    ("Daily", "/daily"),
    ("AI Tools", "/ai"),
];

pub const FOOTER_SUPPORT: &[(&str, &str)] = &[
    ("Help Center", "/help-center"),
    ("FAQ", "/faq"),
    ("Contact Us", "/contact"),
    ("Report a Bug", "/report-bug"),
    ("Request Feature", "/request-feature"),
];

pub const FOOTER_LEGAL: &[(&str, &str)] = &[
    ("Privacy Policy", "/privacy-policy"),
    ("Terms of Service", "/terms-of-service"),
    ("Cookie Policy", "/cookie-policy"),
    ("Disclaimer", "/disclaimer"),
];
