//! Static display strings, one complete set per supported language.
//!
//! Every language is a full [`Strings`] value, so a partial catalog cannot
//! be expressed.

/// Code used when neither the persisted preference nor the platform
/// language maps to a known catalog entry.
pub const DEFAULT_CODE: &str = "en";

/// Placeholder replaced by the transfer percentage in [`Strings::uploading`].
const PERCENT_PLACEHOLDER: &str = "{p}";

#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub flag: &'static str,
    pub upload: &'static str,
    pub proxy: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub drop_text: &'static str,
    pub or_paste_url: &'static str,
    pub duration: &'static str,
    pub upload_btn: &'static str,
    pub uploading: &'static str,
    pub upload_complete: &'static str,
    pub page_url: &'static str,
    pub direct_url: &'static str,
    pub direct_hint: &'static str,
    pub proxy_url: &'static str,
    pub proxy_hint: &'static str,
    pub file: &'static str,
    pub expires: &'static str,
    pub upload_another: &'static str,
    /// Starts a new attempt after a failure.
    pub retry: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub proxy_title: &'static str,
    pub proxy_sub: &'static str,
    pub download: &'static str,
    pub tg_bot: &'static str,
}

impl Strings {
    /// Submit button label while a transfer is running.
    pub fn uploading_label(&self, percent: u8) -> String {
        self.uploading.replace(PERCENT_PLACEHOLDER, &percent.to_string())
    }
}

static EN: Strings = Strings {
    flag: "EN",
    upload: "Upload",
    proxy: "Proxy",
    title: "GigaFile Upload",
    subtitle: "Upload files up to 300 GB",
    drop_text: "Drop file here or click to select",
    or_paste_url: "or paste URL",
    duration: "Duration",
    upload_btn: "Upload",
    uploading: "Uploading... {p}%",
    upload_complete: "Upload Complete",
    page_url: "Page URL",
    direct_url: "Direct URL",
    direct_hint: "(needs cookies)",
    proxy_url: "Proxy URL",
    proxy_hint: "(no cookies needed)",
    file: "File",
    expires: "Expires",
    upload_another: "Upload Another",
    retry: "Retry",
    copy: "Copy",
    copied: "Copied!",
    proxy_title: "GigaFile Proxy",
    proxy_sub: "Download without cookies",
    download: "Download",
    tg_bot: "Telegram Bot",
};

static RU: Strings = Strings {
    flag: "RU",
    upload: "Загрузка",
    proxy: "Прокси",
    title: "GigaFile Загрузка",
    subtitle: "Файлы до 300 ГБ",
    drop_text: "Перетащи файл сюда или нажми для выбора",
    or_paste_url: "или вставь URL",
    duration: "Срок хранения",
    upload_btn: "Загрузить",
    uploading: "Загрузка... {p}%",
    upload_complete: "Загрузка завершена",
    page_url: "Страница",
    direct_url: "Прямая ссылка",
    direct_hint: "(нужны куки)",
    proxy_url: "Прокси-ссылка",
    proxy_hint: "(без куки)",
    file: "Файл",
    expires: "Истекает",
    upload_another: "Загрузить ещё",
    retry: "Повторить",
    copy: "Копировать",
    copied: "Скопировано!",
    proxy_title: "GigaFile Прокси",
    proxy_sub: "Скачивание без куки",
    download: "Скачать",
    tg_bot: "Telegram Бот",
};

static ES: Strings = Strings {
    flag: "ES",
    upload: "Subir",
    proxy: "Proxy",
    title: "GigaFile Subir",
    subtitle: "Archivos hasta 300 GB",
    drop_text: "Arrastra un archivo aqui o haz clic",
    or_paste_url: "o pega una URL",
    duration: "Duracion",
    upload_btn: "Subir",
    uploading: "Subiendo... {p}%",
    upload_complete: "Subida completa",
    page_url: "Pagina",
    direct_url: "Enlace directo",
    direct_hint: "(necesita cookies)",
    proxy_url: "Enlace proxy",
    proxy_hint: "(sin cookies)",
    file: "Archivo",
    expires: "Expira",
    upload_another: "Subir otro",
    retry: "Reintentar",
    copy: "Copiar",
    copied: "Copiado!",
    proxy_title: "GigaFile Proxy",
    proxy_sub: "Descarga sin cookies",
    download: "Descargar",
    tg_bot: "Bot Telegram",
};

static DE: Strings = Strings {
    flag: "DE",
    upload: "Hochladen",
    proxy: "Proxy",
    title: "GigaFile Upload",
    subtitle: "Dateien bis 300 GB",
    drop_text: "Datei hierher ziehen oder klicken",
    or_paste_url: "oder URL einfugen",
    duration: "Dauer",
    upload_btn: "Hochladen",
    uploading: "Hochladen... {p}%",
    upload_complete: "Upload abgeschlossen",
    page_url: "Seite",
    direct_url: "Direkter Link",
    direct_hint: "(Cookies erforderlich)",
    proxy_url: "Proxy-Link",
    proxy_hint: "(ohne Cookies)",
    file: "Datei",
    expires: "Ablauf",
    upload_another: "Weiteres hochladen",
    retry: "Erneut versuchen",
    copy: "Kopieren",
    copied: "Kopiert!",
    proxy_title: "GigaFile Proxy",
    proxy_sub: "Download ohne Cookies",
    download: "Herunterladen",
    tg_bot: "Telegram Bot",
};

static FR: Strings = Strings {
    flag: "FR",
    upload: "Telecharger",
    proxy: "Proxy",
    title: "GigaFile Upload",
    subtitle: "Fichiers jusqu'a 300 Go",
    drop_text: "Deposez un fichier ici ou cliquez",
    or_paste_url: "ou collez une URL",
    duration: "Duree",
    upload_btn: "Telecharger",
    uploading: "Telechargement... {p}%",
    upload_complete: "Telechargement termine",
    page_url: "Page",
    direct_url: "Lien direct",
    direct_hint: "(cookies requis)",
    proxy_url: "Lien proxy",
    proxy_hint: "(sans cookies)",
    file: "Fichier",
    expires: "Expire",
    upload_another: "Telecharger un autre",
    retry: "Reessayer",
    copy: "Copier",
    copied: "Copie!",
    proxy_title: "GigaFile Proxy",
    proxy_sub: "Telechargement sans cookies",
    download: "Telecharger",
    tg_bot: "Bot Telegram",
};

static JA: Strings = Strings {
    flag: "JA",
    upload: "Upload",
    proxy: "Proxy",
    title: "GigaFile Upload",
    subtitle: "300 GB made file upload",
    drop_text: "Drop file here or click",
    or_paste_url: "or paste URL",
    duration: "Duration",
    upload_btn: "Upload",
    uploading: "Uploading... {p}%",
    upload_complete: "Upload Complete",
    page_url: "Page URL",
    direct_url: "Direct URL",
    direct_hint: "(cookies needed)",
    proxy_url: "Proxy URL",
    proxy_hint: "(no cookies)",
    file: "File",
    expires: "Expires",
    upload_another: "Upload Another",
    retry: "再試行",
    copy: "Copy",
    copied: "Copied!",
    proxy_title: "GigaFile Proxy",
    proxy_sub: "Download without cookies",
    download: "Download",
    tg_bot: "Telegram Bot",
};

static ZH: Strings = Strings {
    flag: "ZH",
    upload: "Upload",
    proxy: "Proxy",
    title: "GigaFile Upload",
    subtitle: "Upload up to 300 GB",
    drop_text: "Drop file here or click",
    or_paste_url: "or paste URL",
    duration: "Duration",
    upload_btn: "Upload",
    uploading: "Uploading... {p}%",
    upload_complete: "Upload Complete",
    page_url: "Page URL",
    direct_url: "Direct URL",
    direct_hint: "(cookies needed)",
    proxy_url: "Proxy URL",
    proxy_hint: "(no cookies)",
    file: "File",
    expires: "Expires",
    upload_another: "Upload Another",
    retry: "重试",
    copy: "Copy",
    copied: "Copied!",
    proxy_title: "GigaFile Proxy",
    proxy_sub: "Download without cookies",
    download: "Download",
    tg_bot: "Telegram Bot",
};

static PT: Strings = Strings {
    flag: "PT",
    upload: "Enviar",
    proxy: "Proxy",
    title: "GigaFile Upload",
    subtitle: "Arquivos ate 300 GB",
    drop_text: "Arraste um arquivo ou clique",
    or_paste_url: "ou cole uma URL",
    duration: "Duracao",
    upload_btn: "Enviar",
    uploading: "Enviando... {p}%",
    upload_complete: "Envio completo",
    page_url: "Pagina",
    direct_url: "Link direto",
    direct_hint: "(precisa cookies)",
    proxy_url: "Link proxy",
    proxy_hint: "(sem cookies)",
    file: "Arquivo",
    expires: "Expira",
    upload_another: "Enviar outro",
    retry: "Tentar novamente",
    copy: "Copiar",
    copied: "Copiado!",
    proxy_title: "GigaFile Proxy",
    proxy_sub: "Download sem cookies",
    download: "Baixar",
    tg_bot: "Bot Telegram",
};

/// Supported languages in picker order.
pub static CATALOG: &[(&str, &Strings)] = &[
    ("en", &EN),
    ("ru", &RU),
    ("es", &ES),
    ("de", &DE),
    ("fr", &FR),
    ("ja", &JA),
    ("zh", &ZH),
    ("pt", &PT),
];

/// Returns the strings for `code`, or `None` if it is not a catalog key.
pub fn lookup(code: &str) -> Option<&'static Strings> {
    CATALOG
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, strings)| *strings)
}

/// Returns the canonical `'static` key matching `code`.
pub(crate) fn canonical(code: &str) -> Option<&'static str> {
    CATALOG.iter().map(|(key, _)| *key).find(|key| *key == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_code_is_in_catalog() {
        assert!(lookup(DEFAULT_CODE).is_some());
    }

    #[test]
    fn every_entry_fills_every_label() {
        for (code, strings) in CATALOG {
            let labels = [
                strings.flag,
                strings.upload,
                strings.proxy,
                strings.title,
                strings.subtitle,
                strings.drop_text,
                strings.or_paste_url,
                strings.duration,
                strings.upload_btn,
                strings.uploading,
                strings.upload_complete,
                strings.page_url,
                strings.direct_url,
                strings.direct_hint,
                strings.proxy_url,
                strings.proxy_hint,
                strings.file,
                strings.expires,
                strings.upload_another,
                strings.retry,
                strings.copy,
                strings.copied,
                strings.proxy_title,
                strings.proxy_sub,
                strings.download,
                strings.tg_bot,
            ];
            assert!(
                labels.iter().all(|label| !label.is_empty()),
                "catalog entry {code} has an empty label"
            );
            assert!(strings.uploading.contains(PERCENT_PLACEHOLDER), "{code}");
        }
    }

    #[test]
    fn uploading_label_substitutes_percent() {
        let en = lookup("en").unwrap();
        assert_eq!(en.uploading_label(42), "Uploading... 42%");
    }
}
