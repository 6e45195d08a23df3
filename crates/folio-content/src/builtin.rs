//! Content compiled into the binary, one pack per skin.
//!
//! The two packs describe the same person and register the same document
//! ids, but their hobby/skill sets and internship schema differ.

use folio_types::{
    ApproachStep, DocumentEntry, DocumentKind, Engagement, Figure, HOME_DOCUMENT, Hobby,
    InternRecord, InternTimeline, Internship, Profile, ProfileLinks, Project, Research, Skill,
    SkillGroup, SkillSet, Skin,
};

use crate::ContentPack;

pub fn for_skin(skin: Skin) -> ContentPack {
    match skin {
        Skin::Classic => classic(),
        Skin::Sidebar => sidebar(),
    }
}

pub fn classic() -> ContentPack {
    ContentPack {
        home: Some(HOME_DOCUMENT.into()),
        documents: documents(),
        profile: Profile {
            hobbies: vec![
                hobby("ゴルフ", Some("/assets/hobbies/golf.jpg")),
                hobby("マラソン", None),
                hobby("海外旅行", None),
            ],
            skills: SkillSet::Flat(vec![
                skill("Python", "python.svg"),
                skill("React", "react.svg"),
                skill("MySQL", "mysql.svg"),
                skill("CSS", "css3.svg"),
                skill("HTML", "html5.svg"),
                skill("FastAPI", "fastapi.svg"),
                skill("Docker", "docker.svg"),
            ]),
            ..base_profile()
        },
        projects: projects(),
        research: research(),
        intern: InternRecord::Summary(Internship {
            title: "AIプロトタイプ開発（業務）".to_string(),
            summary: strings(&[
                "音声対話フロー設計、実装、デバッグ、改善提案",
                "Realtime / FastAPI / React / Prompt設計",
            ]),
            outcomes: strings(&[
                "音声テンポ改善（生成指示/設定/再生側調整）",
                "フロー分岐とデータ収集の安定化",
            ]),
            approach: "要件 → 最小PoC → 計測 → 改善 を短いサイクルで回す".to_string(),
        }),
    }
}

pub fn sidebar() -> ContentPack {
    ContentPack {
        home: Some(HOME_DOCUMENT.into()),
        documents: documents(),
        profile: Profile {
            hobbies: vec![hobby("ゴルフ", Some("/assets/hobbies/golf.jpg")), hobby("マラソン", None)],
            skills: SkillSet::Grouped(vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    skills: strings(&["Python", "TypeScript", "SQL"]),
                },
                SkillGroup {
                    category: "Frameworks".to_string(),
                    skills: strings(&["FastAPI", "React"]),
                },
                SkillGroup {
                    category: "Infrastructure".to_string(),
                    skills: strings(&["Docker", "MySQL"]),
                },
            ]),
            ..base_profile()
        },
        projects: projects(),
        research: research(),
        intern: InternRecord::Timeline(InternTimeline {
            title: "Intern / Work".to_string(),
            engagements: vec![Engagement {
                company: "AIプロトタイプ開発（業務）".to_string(),
                role: "AI Engineer Intern".to_string(),
                period: "2025 –".to_string(),
                duties: strings(&[
                    "音声対話フロー設計、実装、デバッグ、改善提案",
                    "音声テンポ改善（生成指示/設定/再生側調整）",
                    "フロー分岐とデータ収集の安定化",
                ]),
                stack: strings(&["Realtime API", "FastAPI", "React", "Prompt設計"]),
            }],
        }),
    }
}

fn documents() -> Vec<DocumentEntry> {
    vec![
        DocumentEntry::new(HOME_DOCUMENT, HOME_DOCUMENT, DocumentKind::Readme),
        DocumentEntry::new("projects.md", "projects.md", DocumentKind::Projects),
        DocumentEntry::new("research.md", "research.md", DocumentKind::Research),
        DocumentEntry::new("intern.md", "intern.md", DocumentKind::Intern),
    ]
}

fn base_profile() -> Profile {
    Profile {
        name: "山内 瞭".to_string(),
        title: "Software Engineer / AI Engineer（研究×実装）".to_string(),
        affiliation: Some("立命館大学院　情報理工学研究科　1回生".to_string()),
        location: "Tokyo, Japan".to_string(),
        links: ProfileLinks {
            lab: Some("https://www.si-lab.org/index-ja.html".to_string()),
            github: Some("https://github.com/yamauchiryo/".to_string()),
            email: Some("ryo62y13@icloud.com".to_string()),
        },
        intro: strings(&[
            "初めまして．山内瞭と申します．立命館大学院情報理工学研究科でLLMエージェントの研究を行っています．\nソフトウェアエンジニアとしても活動しており，AI関連のプロジェクトに携わっています．",
        ]),
        hobbies: Vec::new(),
        skills: SkillSet::default(),
        certifications: strings(&[
            "Python 3 エンジニア認定基礎試験",
            "基本情報技術者",
            "TOEIC 745",
        ]),
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "ShigaChat".to_string(),
            tags: strings(&["Team Project", "滋賀国際協会にて運用中"]),
            org: None,
            lead: None,
            paragraphs: strings(&[
                "Shiga Chatは、滋賀国際協会の職員を対象とした多言語対応の限定公開Q&Aサービスです。",
                "研究室内の活動の一環で開発されました。活動終了後でも運用に至るまで実装をし、実際に滋賀国際協会内で運用中です。",
                "ChatGPTとRAGを組み合わせることで、日常生活に関する質問に対して、迅速かつ地域特化の回答を提供します。ユーザの質問に、RAGで関連する情報をChatGPTに渡します。渡されたテキストをChatGPTが自然な形で回答生成し、ユーザに返します。",
            ]),
            highlights: strings(&[
                "ユーザ体験の向上：質問の投稿から回答までの流れを直感的に設計。画面遷移や操作性に配慮し、初めて使う外国人ユーザでも使いやすいUIを意識。",
                "情報の正確性と安全性：ChatGPTの誤回答（ハルシネーション）を防ぐため、回答の元となるQ&Aデータベースを構築。また、人手による内容チェック、多言語対応の文法チェックを導入。",
                "多言語対応：通知や検索などの基本操作が全対応言語で可能なように設計し、多文化に配慮。",
            ]),
            summary: None,
            references: Vec::new(),
            languages: Vec::new(),
            image: Some("/assets/shigachat.png".to_string()),
        },
        Project {
            title: "Diary Board".to_string(),
            tags: strings(&["Team Project"]),
            org: None,
            lead: None,
            paragraphs: strings(&[
                "Diary Boardは、非自発的に来日した外国人児童が、日本の学校現場で孤立しないように設計された多言語対応の教育支援ツールです。",
                "研究室内の活動の一環で滋賀国際協会へ訪問し、課題をヒアリングする中でこのシステムを開発しました。",
                "日記を通じて外国人児童の過ごす多文化を知り、文化的背景や言語の違いによる障壁を取り除きます。そして児童同士の交流を促進することで、包摂的な学級づくりを支援します。",
            ]),
            highlights: strings(&[
                "継続利用の促進：日記を継続的に書いてもらうために、ランキング機能や称号機能を実装。",
                "多言語学習支援：日記の内容に関するクイズ機能を追加し、楽しみながら言語学習できる仕組みを提供。",
            ]),
            summary: None,
            references: Vec::new(),
            languages: Vec::new(),
            image: Some("/assets/図1.png".to_string()),
        },
    ]
}

fn research() -> Research {
    Research {
        title: "Shared Plans に基づくクロスドメインQA向けマルチLLMエージェント".to_string(),
        summary: Some(
            "近年，LLMを用いた質問応答システムは広く利用されているが，複数分野の知識を段階的に結びつけるクロスドメインQAでは誤答が生じやすい。例えば「忠犬ハチ公が待ち続けた駅はどこで，その飼い主は誰か」といった質問では，人物・地理・出来事を順に関連付ける推論が必要となる。既存手法では推論計画を単一エージェントが管理することが多く，誤った前提や hallucination が推論全体に波及しやすいという課題がある。本研究では1990年代に発表されたマルチエージェントの静的協調フレームワークであるSharedPlans 理論に基づき，複数LLMが計画を共有・合意しながら協調的に推論を進めるクロスドメインQA手法を提案する。"
                .to_string(),
        ),
        approach: vec![
            step("α / Recipe", "共有計画の設計と外在化"),
            step("Context", "根拠の接続と更新"),
            step("Intentions", "合意→修正→実行"),
        ],
        diagram: Some(Figure {
            path: "/assets/sharedplans.png".to_string(),
            caption: Some("研究の全体像を図で示しています。".to_string()),
        }),
    }
}

fn hobby(name: &str, image: Option<&str>) -> Hobby {
    Hobby {
        name: name.to_string(),
        image: image.map(str::to_string),
    }
}

fn skill(name: &str, icon: &str) -> Skill {
    Skill {
        name: name.to_string(),
        image: Some(format!("/assets/skills/{}", icon)),
    }
}

fn step(title: &str, desc: &str) -> ApproachStep {
    ApproachStep {
        title: title.to_string(),
        desc: desc.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
