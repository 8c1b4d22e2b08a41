/// All localized user-facing strings for a locale.
///
/// Strings are stored raw; maud escapes them when rendering.
#[derive(Debug, Clone)]
pub struct Messages {
    pub common: CommonStrings,
    pub metadata: MetadataStrings,
    pub pages: PageStrings,
    pub contact: ContactStrings,
    pub in_app: InAppStrings,
}

#[derive(Debug, Clone)]
pub struct CommonStrings {
    pub brand: &'static str,
    pub skip_link: &'static str,
    pub language_label: &'static str,

    // ==================== Navigation ====================
    pub nav_home: &'static str,
    pub nav_tools: &'static str,
    pub nav_about: &'static str,
    pub nav_faq: &'static str,
    pub nav_privacy: &'static str,
    pub nav_terms: &'static str,
    pub nav_contact: &'static str,

    /// Footer copyright line
    /// Placeholders: {year}, {brand}
    pub footer_rights: &'static str,

    // ==================== Not Found ====================
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub not_found_link: &'static str,
}

#[derive(Debug, Clone)]
pub struct MetadataStrings {
    pub home_title: &'static str,
    pub home_description: &'static str,
}

/// Heading, meta description and paragraphs of a static page.
#[derive(Debug, Clone)]
pub struct StaticPageStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct PageStrings {
    pub home: StaticPageStrings,
    pub tools: StaticPageStrings,
    pub about: StaticPageStrings,
    pub faq: StaticPageStrings,
    pub privacy: StaticPageStrings,
    pub terms: StaticPageStrings,
}

/// Title, description and call-to-action label of a contact method card.
#[derive(Debug, Clone)]
pub struct MethodStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone)]
pub struct FormStrings {
    pub title: &'static str,
    pub description: &'static str,

    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub subject_label: &'static str,
    pub subject_placeholder: &'static str,
    pub subject_general: &'static str,
    pub subject_bug: &'static str,
    pub subject_feature: &'static str,
    pub subject_feedback: &'static str,
    pub subject_other: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,

    pub submit: &'static str,
    pub submitting: &'static str,

    /// Generic failure banner, shared by every relay failure
    pub error: &'static str,
    /// Shown when required fields are missing and JavaScript is off
    pub missing_fields: &'static str,

    pub success_title: &'static str,
    pub success_description: &'static str,
    pub success_button: &'static str,
}

#[derive(Debug, Clone)]
pub struct ContactStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub hero_title: &'static str,
    pub hero_description: &'static str,

    pub email_method: MethodStrings,
    pub group_method: MethodStrings,
    pub personal_method: MethodStrings,

    pub qr_close: &'static str,
    pub qr_alt: &'static str,
    pub qr_scan_hint: &'static str,

    pub form: FormStrings,

    pub faq_title: &'static str,
    /// Placeholders: {brand}
    pub faq_description: &'static str,
    pub faq_button: &'static str,
}

/// Copy for the "open in external browser" overlay.
#[derive(Debug, Clone)]
pub struct InAppStrings {
    pub heading: &'static str,
    pub body: &'static [&'static str],
    pub steps_title: &'static str,
    pub steps: &'static [&'static str],
    pub footer: &'static str,
}

/// Catalog key for a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLabel {
    Home,
    Tools,
    About,
    Faq,
    Privacy,
    Terms,
    Contact,
}

impl Messages {
    pub fn nav_label(&self, label: NavLabel) -> &'static str {
        let common = &self.common;
        match label {
            NavLabel::Home => common.nav_home,
            NavLabel::Tools => common.nav_tools,
            NavLabel::About => common.nav_about,
            NavLabel::Faq => common.nav_faq,
            NavLabel::Privacy => common.nav_privacy,
            NavLabel::Terms => common.nav_terms,
            NavLabel::Contact => common.nav_contact,
        }
    }

    pub fn footer_rights(&self, year: i32) -> String {
        self.common
            .footer_rights
            .replace("{year}", &year.to_string())
            .replace("{brand}", self.common.brand)
    }

    pub fn contact_faq_description(&self) -> String {
        self.contact
            .faq_description
            .replace("{brand}", self.common.brand)
    }
}

// ==================== English Strings ====================

pub static ENGLISH: Messages = Messages {
    common: CommonStrings {
        brand: "PDFCraft",
        skip_link: "Skip to main content",
        language_label: "Language",
        nav_home: "Home",
        nav_tools: "Tools",
        nav_about: "About",
        nav_faq: "FAQ",
        nav_privacy: "Privacy",
        nav_terms: "Terms",
        nav_contact: "Contact",
        footer_rights: "© {year} {brand}. All rights reserved.",
        not_found_title: "Page not found",
        not_found_body: "The page you are looking for does not exist or has been moved.",
        not_found_link: "Back to home",
    },
    metadata: MetadataStrings {
        home_title: "Free Online PDF Tools",
        home_description: "Merge, split, compress, convert and edit PDF files directly in your browser. Your files never leave your device.",
    },
    pages: PageStrings {
        home: StaticPageStrings {
            title: "Professional PDF tools, right in your browser",
            description: "Merge, split, compress, convert and edit PDF files without uploading them anywhere.",
            body: &[
                "PDFCraft processes every document locally. Nothing is uploaded to a server.",
                "All tools are free to use, with no sign-up and no watermarks.",
            ],
        },
        tools: StaticPageStrings {
            title: "All PDF tools",
            description: "Every PDFCraft tool in one place.",
            body: &[
                "Merge, split, compress, rotate, reorder and convert PDF files.",
                "Add watermarks, page numbers, signatures and passwords.",
            ],
        },
        about: StaticPageStrings {
            title: "About PDFCraft",
            description: "Who builds PDFCraft and why.",
            body: &[
                "PDFCraft is an open-source toolbox for working with PDF files privately.",
                "We believe document tools should respect your data by never collecting it.",
            ],
        },
        faq: StaticPageStrings {
            title: "Frequently asked questions",
            description: "Answers to common questions about PDFCraft.",
            body: &[
                "Are my files uploaded? No. All processing happens in your browser.",
                "Is PDFCraft free? Yes. Every tool is free with no usage limits.",
            ],
        },
        privacy: StaticPageStrings {
            title: "Privacy policy",
            description: "How PDFCraft handles your data.",
            body: &[
                "Documents you open in PDFCraft stay on your device.",
                "Messages sent through the contact form are delivered by email and used only to reply to you.",
            ],
        },
        terms: StaticPageStrings {
            title: "Terms of service",
            description: "The terms for using PDFCraft.",
            body: &[
                "PDFCraft is provided as is, without warranty of any kind.",
                "You are responsible for the documents you process with it.",
            ],
        },
    },
    contact: ContactStrings {
        title: "Contact us",
        description: "Get in touch with the PDFCraft team.",
        hero_title: "Contact us",
        hero_description: "Questions, bug reports or ideas? We would love to hear from you.",
        email_method: MethodStrings {
            title: "Email",
            description: "Write to us and we will reply within two business days.",
            action: "Send an email",
        },
        group_method: MethodStrings {
            title: "Community group",
            description: "Join the user group to chat with other PDFCraft users.",
            action: "Join the group chat",
        },
        personal_method: MethodStrings {
            title: "Add us directly",
            description: "Add the team as a contact for one-to-one help.",
            action: "Add as a friend",
        },
        qr_close: "Close",
        qr_alt: "QR Code",
        qr_scan_hint: "Scan with WeChat",
        form: FormStrings {
            title: "Send us a message",
            description: "Fill in the form below and we will get back to you.",
            name_label: "Name",
            name_placeholder: "Your name",
            email_label: "Email",
            email_placeholder: "you@example.com",
            subject_label: "Subject",
            subject_placeholder: "Select a subject",
            subject_general: "General inquiry",
            subject_bug: "Bug report",
            subject_feature: "Feature request",
            subject_feedback: "Feedback",
            subject_other: "Other",
            message_label: "Message",
            message_placeholder: "How can we help?",
            submit: "Send message",
            submitting: "Sending...",
            error: "Something went wrong while sending your message. Please try again.",
            missing_fields: "Please fill in all required fields.",
            success_title: "Message sent",
            success_description: "Thank you for reaching out. We will reply as soon as possible.",
            success_button: "Send another message",
        },
        faq_title: "Looking for quick answers?",
        faq_description: "Many questions about {brand} are already answered in our FAQ.",
        faq_button: "Visit the FAQ",
    },
    in_app: InAppStrings {
        heading: "If you are seeing this page",
        body: &[
            "WeChat cannot open this tool directly.",
            "This is normal, please don't worry.",
        ],
        steps_title: "How to continue",
        steps: &[
            "Tap the ··· button in the top-right corner",
            "Choose \"Open in Browser\" from the menu",
            "(Safari, Chrome or any other browser works)",
        ],
        footer: "PDFCraft - safe, free, local PDF toolbox",
    },
};

// ==================== Chinese Strings ====================

pub static CHINESE: Messages = Messages {
    common: CommonStrings {
        brand: "PDFCraft",
        skip_link: "跳到主要内容",
        language_label: "语言",
        nav_home: "首页",
        nav_tools: "工具",
        nav_about: "关于",
        nav_faq: "常见问题",
        nav_privacy: "隐私",
        nav_terms: "条款",
        nav_contact: "联系我们",
        footer_rights: "© {year} {brand}。保留所有权利。",
        not_found_title: "页面未找到",
        not_found_body: "您访问的页面不存在或已被移动。",
        not_found_link: "返回首页",
    },
    metadata: MetadataStrings {
        home_title: "免费在线 PDF 工具",
        home_description: "直接在浏览器中合并、拆分、压缩、转换和编辑 PDF 文件，文件不会离开您的设备。",
    },
    pages: PageStrings {
        home: StaticPageStrings {
            title: "浏览器里的专业 PDF 工具",
            description: "无需上传即可合并、拆分、压缩、转换和编辑 PDF 文件。",
            body: &[
                "PDFCraft 在本地处理所有文档，不会上传到任何服务器。",
                "所有工具均可免费使用，无需注册，没有水印。",
            ],
        },
        tools: StaticPageStrings {
            title: "全部 PDF 工具",
            description: "所有 PDFCraft 工具一览。",
            body: &[
                "合并、拆分、压缩、旋转、重排和转换 PDF 文件。",
                "添加水印、页码、签名和密码。",
            ],
        },
        about: StaticPageStrings {
            title: "关于 PDFCraft",
            description: "PDFCraft 的团队与初衷。",
            body: &[
                "PDFCraft 是一个开源的、注重隐私的 PDF 工具箱。",
                "我们相信文档工具应当尊重您的数据：从不收集。",
            ],
        },
        faq: StaticPageStrings {
            title: "常见问题",
            description: "关于 PDFCraft 的常见问题解答。",
            body: &[
                "文件会被上传吗？不会，所有处理都在您的浏览器中完成。",
                "PDFCraft 免费吗？是的，所有工具免费且不限次数。",
            ],
        },
        privacy: StaticPageStrings {
            title: "隐私政策",
            description: "PDFCraft 如何处理您的数据。",
            body: &[
                "您在 PDFCraft 中打开的文档始终保留在您的设备上。",
                "通过联系表单发送的消息会以邮件形式送达，仅用于回复您。",
            ],
        },
        terms: StaticPageStrings {
            title: "服务条款",
            description: "使用 PDFCraft 的条款。",
            body: &[
                "PDFCraft 按现状提供，不附带任何形式的保证。",
                "您需对使用本工具处理的文档负责。",
            ],
        },
    },
    contact: ContactStrings {
        title: "联系我们",
        description: "与 PDFCraft 团队取得联系。",
        hero_title: "联系我们",
        hero_description: "有问题、发现 Bug 或有新想法？欢迎告诉我们。",
        email_method: MethodStrings {
            title: "电子邮件",
            description: "给我们写信，我们会在两个工作日内回复。",
            action: "发送邮件",
        },
        group_method: MethodStrings {
            title: "用户交流群",
            description: "加入用户群，与其他 PDFCraft 用户交流。",
            action: "立即加入群聊",
        },
        personal_method: MethodStrings {
            title: "直接添加",
            description: "添加团队为好友，获得一对一帮助。",
            action: "立即添加好友",
        },
        qr_close: "关闭",
        qr_alt: "二维码",
        qr_scan_hint: "请使用微信扫一扫",
        form: FormStrings {
            title: "给我们留言",
            description: "填写下面的表单，我们会尽快回复您。",
            name_label: "姓名",
            name_placeholder: "您的姓名",
            email_label: "邮箱",
            email_placeholder: "you@example.com",
            subject_label: "主题",
            subject_placeholder: "请选择主题",
            subject_general: "一般咨询",
            subject_bug: "问题反馈",
            subject_feature: "功能建议",
            subject_feedback: "意见反馈",
            subject_other: "其他",
            message_label: "留言内容",
            message_placeholder: "我们能为您做些什么？",
            submit: "发送消息",
            submitting: "发送中...",
            error: "发送消息时出错，请稍后重试。",
            missing_fields: "请填写所有必填项。",
            success_title: "消息已发送",
            success_description: "感谢您的来信，我们会尽快回复。",
            success_button: "再发一条",
        },
        faq_title: "想快速找到答案？",
        faq_description: "关于 {brand} 的许多问题已在常见问题中解答。",
        faq_button: "查看常见问题",
    },
    in_app: InAppStrings {
        heading: "如果您看到此页面",
        body: &["说明微信无法直接访问本工具。", "这很正常，请不要担心。"],
        steps_title: "如何继续使用？",
        steps: &[
            "请点击屏幕右上角的 ··· 按钮",
            "在弹出的菜单中选择「在浏览器打开」",
            "(Safari、Chrome或其他浏览器均可)",
        ],
        footer: "PDFCraft - 安全免费的本地 PDF 工具箱",
    },
};

// ==================== Arabic Strings ====================

pub static ARABIC: Messages = Messages {
    common: CommonStrings {
        brand: "PDFCraft",
        skip_link: "انتقل إلى المحتوى الرئيسي",
        language_label: "اللغة",
        nav_home: "الرئيسية",
        nav_tools: "الأدوات",
        nav_about: "من نحن",
        nav_faq: "الأسئلة الشائعة",
        nav_privacy: "الخصوصية",
        nav_terms: "الشروط",
        nav_contact: "اتصل بنا",
        footer_rights: "© {year} {brand}. جميع الحقوق محفوظة.",
        not_found_title: "الصفحة غير موجودة",
        not_found_body: "الصفحة التي تبحث عنها غير موجودة أو تم نقلها.",
        not_found_link: "العودة إلى الرئيسية",
    },
    metadata: MetadataStrings {
        home_title: "أدوات PDF مجانية عبر الإنترنت",
        home_description: "ادمج ملفات PDF وقسّمها واضغطها وحوّلها وحرّرها مباشرة في متصفحك. ملفاتك لا تغادر جهازك أبدًا.",
    },
    pages: PageStrings {
        home: StaticPageStrings {
            title: "أدوات PDF احترافية في متصفحك",
            description: "ادمج ملفات PDF وقسّمها واضغطها وحوّلها دون رفعها إلى أي مكان.",
            body: &[
                "يعالج PDFCraft كل مستند محليًا. لا يتم رفع أي شيء إلى خادم.",
                "جميع الأدوات مجانية، دون تسجيل ودون علامات مائية.",
            ],
        },
        tools: StaticPageStrings {
            title: "جميع أدوات PDF",
            description: "كل أدوات PDFCraft في مكان واحد.",
            body: &[
                "ادمج ملفات PDF وقسّمها واضغطها وأدرها وأعد ترتيبها وحوّلها.",
                "أضف علامات مائية وأرقام صفحات وتوقيعات وكلمات مرور.",
            ],
        },
        about: StaticPageStrings {
            title: "حول PDFCraft",
            description: "من يبني PDFCraft ولماذا.",
            body: &[
                "PDFCraft مجموعة أدوات مفتوحة المصدر للعمل على ملفات PDF بخصوصية.",
                "نؤمن بأن أدوات المستندات يجب أن تحترم بياناتك بعدم جمعها أبدًا.",
            ],
        },
        faq: StaticPageStrings {
            title: "الأسئلة الشائعة",
            description: "إجابات عن الأسئلة الشائعة حول PDFCraft.",
            body: &[
                "هل يتم رفع ملفاتي؟ لا. تتم كل المعالجة في متصفحك.",
                "هل PDFCraft مجاني؟ نعم. كل الأدوات مجانية دون حدود للاستخدام.",
            ],
        },
        privacy: StaticPageStrings {
            title: "سياسة الخصوصية",
            description: "كيف يتعامل PDFCraft مع بياناتك.",
            body: &[
                "المستندات التي تفتحها في PDFCraft تبقى على جهازك.",
                "تُسلَّم الرسائل المرسلة عبر نموذج الاتصال بالبريد الإلكتروني وتُستخدم فقط للرد عليك.",
            ],
        },
        terms: StaticPageStrings {
            title: "شروط الخدمة",
            description: "شروط استخدام PDFCraft.",
            body: &[
                "يُقدَّم PDFCraft كما هو، دون أي ضمان.",
                "أنت مسؤول عن المستندات التي تعالجها به.",
            ],
        },
    },
    contact: ContactStrings {
        title: "اتصل بنا",
        description: "تواصل مع فريق PDFCraft.",
        hero_title: "اتصل بنا",
        hero_description: "لديك سؤال أو خطأ تود الإبلاغ عنه أو فكرة؟ يسعدنا أن نسمع منك.",
        email_method: MethodStrings {
            title: "البريد الإلكتروني",
            description: "راسلنا وسنرد خلال يومي عمل.",
            action: "أرسل بريدًا إلكترونيًا",
        },
        group_method: MethodStrings {
            title: "مجموعة المستخدمين",
            description: "انضم إلى مجموعة المستخدمين للدردشة مع مستخدمي PDFCraft الآخرين.",
            action: "انضم إلى المجموعة",
        },
        personal_method: MethodStrings {
            title: "أضفنا مباشرة",
            description: "أضف الفريق كجهة اتصال للحصول على مساعدة فردية.",
            action: "أضف كصديق",
        },
        qr_close: "إغلاق",
        qr_alt: "رمز QR",
        qr_scan_hint: "امسح الرمز باستخدام WeChat",
        form: FormStrings {
            title: "أرسل لنا رسالة",
            description: "املأ النموذج أدناه وسنعود إليك.",
            name_label: "الاسم",
            name_placeholder: "اسمك",
            email_label: "البريد الإلكتروني",
            email_placeholder: "you@example.com",
            subject_label: "الموضوع",
            subject_placeholder: "اختر موضوعًا",
            subject_general: "استفسار عام",
            subject_bug: "الإبلاغ عن خطأ",
            subject_feature: "طلب ميزة",
            subject_feedback: "ملاحظات",
            subject_other: "أخرى",
            message_label: "الرسالة",
            message_placeholder: "كيف يمكننا مساعدتك؟",
            submit: "إرسال الرسالة",
            submitting: "جارٍ الإرسال...",
            error: "حدث خطأ أثناء إرسال رسالتك. يرجى المحاولة مرة أخرى.",
            missing_fields: "يرجى ملء جميع الحقول المطلوبة.",
            success_title: "تم إرسال الرسالة",
            success_description: "شكرًا لتواصلك معنا. سنرد في أقرب وقت ممكن.",
            success_button: "إرسال رسالة أخرى",
        },
        faq_title: "تبحث عن إجابات سريعة؟",
        faq_description: "الكثير من الأسئلة حول {brand} تمت الإجابة عنها في صفحة الأسئلة الشائعة.",
        faq_button: "زيارة الأسئلة الشائعة",
    },
    in_app: InAppStrings {
        heading: "إذا كنت ترى هذه الصفحة",
        body: &[
            "لا يمكن لـ WeChat فتح هذه الأداة مباشرة.",
            "هذا أمر طبيعي، لا تقلق.",
        ],
        steps_title: "كيف تتابع؟",
        steps: &[
            "اضغط على زر ··· في الزاوية العلوية اليمنى",
            "اختر \"فتح في المتصفح\" من القائمة",
            "(يعمل Safari أو Chrome أو أي متصفح آخر)",
        ],
        footer: "PDFCraft - صندوق أدوات PDF محلي وآمن ومجاني",
    },
};
