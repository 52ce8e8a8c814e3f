use leptos::prelude::*;

use crate::state::SectionId;

struct Skill {
    name: &'static str,
    icon: &'static str,
}

const fn skill(name: &'static str, icon: &'static str) -> Skill {
    Skill { name, icon }
}

// each inner slice is one group, separated by a bar when rendered
static TOOLING_ROW: &[&[Skill]] = &[
    &[
        skill("Electron", "devicon-electron-original colored"),
        skill("Visual Basic", "devicon-visualbasic-plain colored"),
        skill("C#", "devicon-csharp-plain colored"),
    ],
    &[
        skill("React", "devicon-react-original colored"),
        skill("Vue", "devicon-vuejs-plain colored"),
        skill("Tailwind", "devicon-tailwindcss-original colored"),
        skill("Bootstrap", "devicon-bootstrap-plain colored"),
    ],
    &[
        skill("NestJS", "devicon-nestjs-original colored"),
        skill("Express", "devicon-express-original"),
    ],
    &[
        skill("MongoDB", "devicon-mongodb-plain colored"),
        skill("MySQL", "devicon-mysql-original colored"),
    ],
];

static WORKFLOW_ROW: &[&[Skill]] = &[
    &[skill("Figma", "devicon-figma-plain colored")],
    &[
        skill("GitLab", "devicon-gitlab-plain colored"),
        skill("Bitbucket", "devicon-bitbucket-original colored"),
        skill("GitHub", "devicon-github-original"),
    ],
];

#[component]
fn SkillRow(groups: &'static [&'static [Skill]]) -> impl IntoView {
    let last = groups.len().saturating_sub(1);
    let groups = groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let skills = group
                .iter()
                .map(|s| {
                    view! {
                        <span class="flex items-center gap-2">
                            <i class=s.icon></i>
                            {s.name}
                        </span>
                    }
                })
                .collect_view();
            view! {
                {skills}
                {(i < last)
                    .then(|| {
                        view! { <span class="text-gray-500 dark:text-gray-400 text-xl">"|"</span> }
                    })}
            }
        })
        .collect_view();
    view! {
        <p class="flex flex-wrap items-center justify-center gap-4 text-lg md:text-xl mb-8 text-gray-700 dark:text-[#B0B0B0]">
            {groups}
        </p>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id=SectionId::Home.anchor()
            class="min-h-screen w-full flex items-center justify-center text-center bg-gradient-to-br from-white via-gray-100 to-gray-200 dark:from-[#080707] dark:via-[#131212] dark:to-[#1e1b19] px-6"
        >
            <div class="flex flex-col items-center">
                <img
                    src="/Profile.png"
                    alt="Jebonne"
                    class="w-36 h-44 md:w-64 md:h-80 rounded-full object-cover object-top border-4 border-black dark:border-[#E5E5E5] shadow-md mb-6"
                />
                <h2 class="text-5xl md:text-7xl font-extrabold mb-4 tracking-tight">
                    "Hi, I'm Jebonne"
                </h2>
                <p class="text-lg md:text-xl text-gray-700 dark:text-[#B0B0B0] mb-6">
                    "Desktop and Web Developer"
                </p>
                <SkillRow groups=TOOLING_ROW />
                <SkillRow groups=WORKFLOW_ROW />
                <div class="flex justify-center gap-6 text-3xl mt-6">
                    <a
                        href="https://github.com/jebonne123"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-600 hover:text-black dark:text-[#6e6e6e] dark:hover:text-white transition-colors"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-original"></i>
                    </a>
                    <a
                        href="https://www.linkedin.com/in/elvi%C3%B1a-jebonne-t-b13018276/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-700 dark:text-[#0077B5] hover:text-black dark:hover:text-white transition-colors"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section
            id=SectionId::About.anchor()
            class="min-h-screen w-full flex items-center bg-gradient-to-br from-gray-200 via-gray-300 to-gray-400 dark:from-[#1e1b19] dark:via-[#2c2724] dark:to-[#413530] px-6"
        >
            <div class="max-w-4xl mx-auto">
                <h3 class="text-4xl font-bold mb-8">"About Me"</h3>
                <div class="text-lg leading-relaxed text-gray-700 dark:text-[#B0B0B0] space-y-6">
                    <p>
                        "I'm Jebonne, a passionate full-stack developer with a strong foundation in both web and desktop application development."
                    </p>
                    <p>
                        <strong>"For web development"</strong>
                        ", I work extensively with modern technologies such as "
                        <span class="font-medium">
                            "React, Vue, Tailwind CSS, Bootstrap, Node.js, Express, and NestJS"
                        </span>
                        " to build scalable, responsive, and high-performance applications."
                    </p>
                    <p>
                        <strong>"For desktop development"</strong>
                        ", I specialize in "
                        <span class="font-medium">"C# with WinForms, WPF, and Blazor"</span>
                        " for robust .NET-based applications, and leverage "
                        <span class="font-medium">"Electron"</span>
                        " to create cross-platform desktop apps using web technologies."
                    </p>
                    <p>
                        "I actively use version control systems like "
                        <span class="font-medium">"GitHub, GitLab, and Bitbucket"</span>
                        " to manage codebases, collaborate with teams, and maintain clean development workflows across all my projects."
                    </p>
                    <p>
                        "Whether it's designing elegant UIs or engineering solid backend systems, I'm committed to delivering clean, maintainable, and impactful software experiences."
                    </p>
                </div>
            </div>
        </section>
    }
}

struct ContactItem {
    icon: &'static str,
    text: &'static str,
    href: Option<&'static str>,
}

static CONTACTS: &[ContactItem] = &[
    ContactItem {
        icon: "📧",
        text: "jebonne12@gmail.com",
        href: Some("mailto:jebonne12@gmail.com"),
    },
    ContactItem {
        icon: "📞",
        text: "+63 9380251376",
        href: Some("tel:+639380251376"),
    },
    ContactItem {
        icon: "💬",
        text: "tarnished#7418",
        href: None,
    },
    ContactItem {
        icon: "✈️",
        text: "@Jebonne",
        href: Some("https://t.me/@Jebonne"),
    },
    ContactItem {
        icon: "𝕏",
        text: "@Jebonne2",
        href: Some("https://x.com/Jebonne2"),
    },
];

#[component]
pub fn Contact() -> impl IntoView {
    let cards = CONTACTS
        .iter()
        .map(|c| {
            let body = match c.href {
                Some(href) => view! {
                    <a
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-md font-medium text-gray-800 dark:text-gray-300 hover:underline"
                    >
                        {c.text}
                    </a>
                }
                .into_any(),
                None => view! {
                    <span class="text-md text-gray-800 dark:text-gray-300">{c.text}</span>
                }
                .into_any(),
            };
            view! {
                <div class="flex items-center gap-3 bg-white dark:bg-[#1e1b19] shadow-md p-4 rounded-xl w-full max-w-xs hover:scale-[1.02] transition">
                    <span class="text-xl">{c.icon}</span>
                    {body}
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::Contact.anchor()
            class="min-h-screen w-full flex items-center bg-gradient-to-br from-gray-100 via-gray-200 to-gray-300 dark:from-[#413530] dark:via-[#1e1b19] dark:to-[#080707] px-6"
        >
            <div class="max-w-5xl mx-auto w-full text-center">
                <h3 class="text-4xl font-bold mb-6">"Get in Touch"</h3>
                <p class="text-lg mb-12 text-gray-700 dark:text-[#B0B0B0]">
                    "Whether you have a question, want to collaborate, or just want to connect, reach me through any of these:"
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 text-left justify-items-center">
                    {cards}
                </div>
            </div>
        </section>
    }
}
