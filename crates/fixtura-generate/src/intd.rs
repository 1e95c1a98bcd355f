//! Locale-independent reference data.

pub const COUNTRIES_ISO2: &[&str] = &[
    "AR", "AU", "AT", "BE", "BR", "CA", "CH", "CN", "DE", "DK", "ES", "FI", "FR", "GB", "IN",
    "IT", "JP", "MX", "NL", "NO", "PL", "RU", "SE", "UA", "US",
];

pub const COUNTRIES_ISO3: &[&str] = &[
    "ARG", "AUS", "AUT", "BEL", "BRA", "CAN", "CHE", "CHN", "DEU", "DNK", "ESP", "FIN", "FRA",
    "GBR", "IND", "ITA", "JPN", "MEX", "NLD", "NOR", "POL", "RUS", "SWE", "UKR", "USA",
];

pub const COUNTRIES_NUMERIC: &[&str] = &[
    "032", "036", "040", "056", "076", "124", "756", "156", "276", "208", "724", "246", "250",
    "826", "356", "380", "392", "484", "528", "578", "616", "643", "752", "804", "840",
];

pub const CURRENCIES: &[&str] = &[
    "AUD", "BRL", "CAD", "CHF", "CNY", "DKK", "EUR", "GBP", "INR", "JPY", "MXN", "NOK", "PLN",
    "RUB", "SEK", "UAH", "USD",
];

/// Type Allocation Codes of real handset models (8 digits each).
pub const IMEI_TACS: &[&str] = &[
    "01124500", "01161200", "01194800", "01300600", "35209900", "35332400", "35391805",
    "35487704", "35780502", "49015420",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "@example.com",
    "@example.org",
    "@example.net",
    "@mail.test",
    "@inbox.test",
];

pub const BLOOD_GROUPS: &[&str] = &["O+", "A+", "B+", "AB+", "O-", "A-", "B-", "AB-"];

pub const GENDER_SYMBOLS: &[&str] = &["♂", "♀", "⚲"];

pub const TRUCKS: &[&str] = &[
    "Caledon", "DAF", "Foden", "Freightliner", "Hino", "Isuzu", "Kenworth", "MAN", "Mack",
    "Peterbilt", "Scania", "Volvo",
];

pub const CARS: &[&str] = &[
    "Audi A4",
    "BMW 3 Series",
    "Ford Focus",
    "Honda Civic",
    "Lada Niva",
    "Mazda 3",
    "Tesla Model S",
    "Toyota Corolla",
    "Volkswagen Golf",
];

pub const AIRPLANES: &[&str] = &[
    "Airbus",
    "Antonov",
    "Boeing",
    "Bombardier",
    "Embraer",
    "Ilyushin",
    "Tupolev",
];

pub const ROMAN_CENTURIES: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];

pub const MATH_FORMULAS: &[&str] = &[
    "A = (ab)/2",
    "A = a2",
    "A = πr2",
    "E = mc2",
    "P = 2(a + b)",
    "V = (4/3)πr3",
    "a2 + b2 = c2",
    "c = 2πr",
];

pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

pub const SEXUALITY_SYMBOLS: &[&str] = &["⚤", "⚢", "⚣", "⚥", "⚧", "⚪"];

pub const FAVORITE_MUSIC_GENRE: &[&str] = &[
    "Ambient", "Blues", "Classical", "Country", "Drum and bass", "Electronic", "Folk", "Hip hop",
    "Jazz", "Metal", "Pop", "Punk", "Reggae", "Rock", "Soul", "Techno",
];

pub const ENGLISH_LEVELS: &[&str] = &[
    "Beginner",
    "Elementary",
    "Pre - Intermediate",
    "Intermediate",
    "Upper Intermediate",
    "Advanced",
    "Proficiency",
];

pub const BITCOIN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const EXTENSIONS_SOURCE: &[&str] = &[".c", ".cpp", ".go", ".java", ".js", ".py", ".rb", ".rs", ".swift"];
pub const EXTENSIONS_TEXT: &[&str] = &[".doc", ".docx", ".log", ".md", ".rtf", ".txt", ".odt"];
pub const EXTENSIONS_DATA: &[&str] = &[".csv", ".dat", ".json", ".sql", ".xml", ".yaml"];
pub const EXTENSIONS_AUDIO: &[&str] = &[".aac", ".flac", ".m4a", ".mp3", ".ogg", ".wav"];
pub const EXTENSIONS_VIDEO: &[&str] = &[".avi", ".flv", ".m4v", ".mkv", ".mov", ".mp4", ".webm"];
pub const EXTENSIONS_IMAGE: &[&str] = &[".bmp", ".gif", ".jpeg", ".jpg", ".png", ".svg", ".tiff"];
pub const EXTENSIONS_EXECUTABLE: &[&str] = &[".apk", ".app", ".bat", ".exe", ".jar", ".sh"];
pub const EXTENSIONS_COMPRESSED: &[&str] = &[".7z", ".gz", ".rar", ".tar", ".xz", ".zip"];

pub const MIME_TYPES: &[&str] = &[
    "application/gzip",
    "application/json",
    "application/octet-stream",
    "application/pdf",
    "application/xml",
    "application/zip",
    "audio/mpeg",
    "audio/ogg",
    "image/gif",
    "image/jpeg",
    "image/png",
    "image/svg+xml",
    "text/css",
    "text/csv",
    "text/html",
    "text/plain",
    "video/mp4",
    "video/webm",
];

pub const LICENSES: &[&str] = &[
    "Apache License, 2.0 (Apache-2.0)",
    "The BSD 3-Clause License",
    "The BSD 2-Clause License",
    "GNU General Public License (GPL)",
    "GNU Library or \"Lesser\" General Public License (LGPL)",
    "MIT License (MIT)",
    "Mozilla Public License 2.0 (MPL-2.0)",
    "Common Development and Distribution License (CDDL-1.0)",
    "Eclipse Public License (EPL-1.0)",
];

pub const SQL_DATABASES: &[&str] = &[
    "MariaDB", "Microsoft SQL Server", "MySQL", "Oracle", "PostgreSQL", "SQLite",
];

pub const NOSQL_DATABASES: &[&str] = &[
    "Cassandra", "CouchDB", "MongoDB", "Neo4j", "Redis", "RethinkDB", "Riak",
];

pub const OTHER_TECH: &[&str] = &[
    "Docker", "Ansible", "Elasticsearch", "Git", "Jenkins", "Kubernetes", "Nginx", "RabbitMQ",
    "Vagrant", "Webpack",
];

pub const PROGRAMMING_LANGS: &[&str] = &[
    "C", "C#", "C++", "Clojure", "Elixir", "Erlang", "Go", "Haskell", "Java", "JavaScript",
    "Kotlin", "OCaml", "Python", "Ruby", "Rust", "Scala", "Swift",
];

pub const BACKEND: &[&str] = &[
    "C#/ASP.NET",
    "Elixir/Phoenix",
    "Go/Gin",
    "Java/Spring",
    "JS/Node.js",
    "Python/Django",
    "Python/Flask",
    "Ruby/Rails",
    "Rust/Actix",
];

pub const FRONTEND: &[&str] = &[
    "Elm", "JS/Angular", "JS/Ember", "JS/React", "JS/Vue", "TypeScript/Angular", "ClojureScript",
];

pub const OS: &[&str] = &[
    "Arch", "CentOS", "Debian", "Fedora", "FreeBSD", "Gentoo", "Kali", "Linux Mint", "macOS",
    "OpenBSD", "Ubuntu", "Windows 10",
];

pub const RESOLUTIONS: &[&str] = &[
    "1152x768", "1280x720", "1280x800", "1366x768", "1440x900", "1600x900", "1920x1080",
    "1920x1200", "2560x1440", "2560x1600", "2880x1800", "3840x2160",
];

pub const SCREEN_SIZES: &[&str] = &[
    "11″", "12″", "13″", "14″", "15″", "17″", "21.5″", "24″", "27″",
];

pub const CPU: &[&str] = &[
    "AMD Ryzen 5",
    "AMD Ryzen 7",
    "Apple M1",
    "Intel® Core i3",
    "Intel® Core i5",
    "Intel® Core i7",
    "Intel® Core i9",
    "Intel® Xeon",
];

pub const GENERATION: &[&str] = &[
    "2nd Generation",
    "3rd Generation",
    "4th Generation",
    "5th Generation",
    "6th Generation",
    "7th Generation",
    "8th Generation",
];

pub const GENERATION_ABBR: &[&str] = &["2nd Gen", "3rd Gen", "4th Gen", "5th Gen", "6th Gen", "7th Gen", "8th Gen"];

pub const CPU_CODENAMES: &[&str] = &[
    "Broadwell", "Cannonlake", "Coffee Lake", "Haswell", "Ivy Bridge", "Kaby Lake", "Sandy Bridge",
    "Skylake", "Zen", "Zen 2",
];

pub const RAM_TYPES: &[&str] = &["DDR2", "DDR3", "DDR4"];

pub const RAM_SIZES: &[&str] = &["4", "6", "8", "16", "32", "64"];

pub const MEMORY: &[&str] = &[
    "64GB SSD", "128GB SSD", "256GB SSD", "512GB SSD", "1TB SSD", "500GB HDD", "1TB HDD",
    "2TB HDD",
];

pub const GRAPHICS: &[&str] = &[
    "AMD Radeon Pro 560",
    "AMD Radeon RX 580",
    "Intel® HD Graphics 620",
    "Intel® Iris™ Pro Graphics 6200",
    "Intel® Iris™ Plus Graphics 650",
    "Nvidia GeForce GTX 1060",
    "Nvidia GeForce GTX 1080",
    "Nvidia Quadro P4000",
];

pub const MANUFACTURERS: &[&str] = &[
    "Acer", "Apple", "Asus", "Dell", "Fujitsu", "HP", "Lenovo", "MSI", "Samsung", "Sony",
    "Toshiba",
];

pub const PHONE_MODELS: &[&str] = &[
    "Google Pixel",
    "Huawei P10",
    "iPhone 7",
    "iPhone SE",
    "LG G6",
    "Motorola Moto G5",
    "Nokia Lumia 920",
    "OnePlus 5",
    "Samsung Galaxy S8",
    "Xiaomi Mi 6",
];

pub const INTERNATIONAL_SIZES: &[&str] = &["L", "M", "S", "XL", "XS", "XXL", "XXS", "XXXL"];

pub const EMOJI: &[&str] = &[
    ":+1:", ":blush:", ":cat:", ":coffee:", ":fire:", ":heart:", ":kissing:", ":laughing:",
    ":rocket:", ":smile:", ":sunglasses:", ":tada:", ":thinking:", ":wink:",
];

pub const IMAGE_KEYWORDS: &[&str] = &[
    "cat", "girl", "boy", "beauty", "nature", "woman", "man", "tech", "space", "science",
];

pub const HASHTAGS_GENERAL: &[&str] = &["#daily", "#instagood", "#nice", "#photooftheday", "#sky"];
pub const HASHTAGS_GIRLS: &[&str] = &["#beautiful", "#girl", "#girls", "#makeup", "#pretty"];
pub const HASHTAGS_LOVE: &[&str] = &["#couple", "#hugs", "#kisses", "#love", "#romance"];
pub const HASHTAGS_BOYS: &[&str] = &["#beard", "#boy", "#boys", "#guy", "#man"];
pub const HASHTAGS_FRIENDS: &[&str] = &["#bestfriends", "#bff", "#friends", "#fun", "#together"];
pub const HASHTAGS_FAMILY: &[&str] = &["#brother", "#family", "#home", "#parents", "#sister"];
pub const HASHTAGS_NATURE: &[&str] = &["#forest", "#mountains", "#nature", "#sunset", "#trees"];
pub const HASHTAGS_TRAVEL: &[&str] = &["#adventure", "#explore", "#travel", "#trip", "#wanderlust"];
pub const HASHTAGS_CARS: &[&str] = &["#car", "#cargram", "#carporn", "#drive", "#speed"];
pub const HASHTAGS_SPORT: &[&str] = &["#fitness", "#gym", "#run", "#sport", "#workout"];
pub const HASHTAGS_TUMBLR: &[&str] = &["#aesthetic", "#grunge", "#indie", "#pastel", "#tumblr"];

pub const DOMAINS: &[&str] = &[".com", ".info", ".io", ".net", ".org", ".ru", ".de"];

pub const SUBREDDITS: &[&str] = &[
    "/r/aww", "/r/books", "/r/flask", "/r/funny", "/r/learnprogramming", "/r/movies",
    "/r/music", "/r/python", "/r/rust", "/r/science", "/r/worldnews",
];

pub const SUBREDDITS_NSFW: &[&str] = &["/r/nsfw", "/r/nsfw_gifs", "/r/nsfw_wtf"];

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:15.0) Gecko/20100101 Firefox/15.0.1",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_5) AppleWebKit/603.2.4 (KHTML, like Gecko) Version/10.1.1 Safari/603.2.4",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 10_3 like Mac OS X) AppleWebKit/603.1.30 (KHTML, like Gecko) Mobile/14E277",
    "Opera/9.80 (Windows NT 6.1; U; en) Presto/2.10.289 Version/12.01",
];

pub const PROTOCOLS: &[&str] = &["http", "https"];

/// How the value of a CSS property is produced.
#[derive(Debug, Clone, Copy)]
pub enum CssValue {
    Choice(&'static [&'static str]),
    Color,
    Size,
}

/// How the value of an HTML attribute is produced.
#[derive(Debug, Clone, Copy)]
pub enum AttributeValue {
    Choice(&'static [&'static str]),
    Css,
    Word,
    Url,
}

pub const CSS_SELECTORS: &[&str] = &[".", "#"];

pub const CSS_SIZE_UNITS: &[&str] = &["cm", "em", "ex", "in", "mm", "pc", "pt", "px", "%"];

pub const CSS_PROPERTIES: &[(&str, CssValue)] = &[
    ("background-color", CssValue::Color),
    ("border-color", CssValue::Color),
    ("color", CssValue::Color),
    ("cursor", CssValue::Choice(&["crosshair", "default", "help", "pointer", "text"])),
    ("display", CssValue::Choice(&["block", "flex", "inline", "inline-block", "none"])),
    ("float", CssValue::Choice(&["left", "none", "right"])),
    ("font-size", CssValue::Size),
    ("font-weight", CssValue::Choice(&["bold", "bolder", "lighter", "normal"])),
    ("height", CssValue::Size),
    ("margin-left", CssValue::Size),
    ("padding-right", CssValue::Size),
    ("text-align", CssValue::Choice(&["center", "justify", "left", "right"])),
    ("width", CssValue::Size),
];

pub const HTML_MARKUP_TAGS: &[&str] = &["b", "em", "i", "small", "strong", "sub", "sup"];

const BLOCK_ATTRIBUTES: &[(&str, AttributeValue)] = &[
    ("class", AttributeValue::Word),
    ("id", AttributeValue::Word),
    ("style", AttributeValue::Css),
];

pub const HTML_CONTAINER_TAGS: &[(&str, &[(&str, AttributeValue)])] = &[
    (
        "a",
        &[
            ("href", AttributeValue::Url),
            ("hreflang", AttributeValue::Choice(&["de", "en", "ru"])),
            ("media", AttributeValue::Choice(&["all", "print", "screen"])),
            (
                "rel",
                AttributeValue::Choice(&["alternate", "author", "bookmark", "help", "nofollow"]),
            ),
            ("target", AttributeValue::Choice(&["_blank", "_parent", "_self", "_top"])),
            ("type", AttributeValue::Choice(&["text/html"])),
        ],
    ),
    ("div", BLOCK_ATTRIBUTES),
    ("p", BLOCK_ATTRIBUTES),
    ("span", BLOCK_ATTRIBUTES),
];
