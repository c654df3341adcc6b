use seedcast_analysis::{AnalysisResult, AnteResult, BlindResult, Item, Pack};
use std::fmt::Write;

pub fn format_item(item: &Item) -> String {
    let mut out = item.name().to_string();
    let mut tags = Vec::new();
    if let Some(edition) = item.edition() {
        tags.push(edition.to_string());
    }
    match item {
        Item::Joker { stickers, .. } => {
            if stickers.eternal {
                tags.push("Eternal".to_string());
            }
            if stickers.perishable {
                tags.push("Perishable".to_string());
            }
            if stickers.rental {
                tags.push("Rental".to_string());
            }
        }
        Item::StandardCard {
            enhancement, seal, ..
        } => {
            if let Some(enhancement) = enhancement {
                tags.push(format!("{enhancement:?}"));
            }
            if let Some(seal) = seal {
                tags.push(format!("{seal:?} Seal"));
            }
        }
        _ => {}
    }
    if !tags.is_empty() {
        out.push_str(" [");
        out.push_str(&tags.join(","));
        out.push(']');
    }
    out
}

fn format_pack(pack: &Pack) -> String {
    let items: Vec<String> = pack.items.iter().map(format_item).collect();
    format!(
        "{} (pick {}/{}): {}",
        pack.name,
        pack.picks,
        pack.size,
        items.join(", ")
    )
}

fn write_blind(out: &mut String, label: &str, blind: &BlindResult) {
    if blind.packs.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {label}:");
    for pack in &blind.packs {
        let _ = writeln!(out, "    {}", format_pack(pack));
    }
}

pub fn format_ante(ante: &AnteResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Ante {} ==", ante.ante);
    let _ = writeln!(out, "  Boss: {}", ante.boss);
    let _ = writeln!(out, "  Voucher: {}", ante.voucher);
    let _ = writeln!(out, "  Tags: {} / {}", ante.tags[0], ante.tags[1]);
    let _ = writeln!(out, "  Shop:");
    for (index, item) in ante.queue.iter().enumerate() {
        let _ = writeln!(out, "    {:>3}. {}", index + 1, format_item(item));
    }
    write_blind(&mut out, "Small blind packs", &ante.blinds.small);
    write_blind(&mut out, "Big blind packs", &ante.blinds.big);
    write_blind(&mut out, "Boss blind packs", &ante.blinds.boss);
    for source in &ante.misc {
        if source.items.is_empty() {
            continue;
        }
        let items: Vec<String> = source.items.iter().take(5).map(format_item).collect();
        let _ = writeln!(out, "  {}: {}", source.id, items.join(", "));
    }
    out
}

pub fn format_result(result: &AnalysisResult) -> String {
    let mut out = format!("Seed {}\n", result.seed);
    for ante in result.antes.values() {
        out.push_str(&format_ante(ante));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedcast_core::{Edition, Enhancement, JokerRarity, JokerStickers, Rank, Seal, Suit};

    #[test]
    fn joker_tags_follow_name() {
        let item = Item::Joker {
            name: "Blueprint".to_string(),
            edition: Some(Edition::Negative),
            rarity: JokerRarity::Rare,
            stickers: JokerStickers {
                eternal: true,
                perishable: false,
                rental: true,
            },
        };
        assert_eq!(format_item(&item), "Blueprint [Negative,Eternal,Rental]");
    }

    #[test]
    fn plain_cards_have_no_brackets() {
        let item = Item::Tarot {
            name: "The Fool".to_string(),
            edition: None,
        };
        assert_eq!(format_item(&item), "The Fool");
    }

    #[test]
    fn standard_card_shows_enhancement_and_seal() {
        let item = Item::StandardCard {
            name: "Ace of Spades".to_string(),
            edition: None,
            rank: Rank::Ace,
            suit: Suit::Spades,
            enhancement: Some(Enhancement::Glass),
            seal: Some(Seal::Red),
        };
        assert_eq!(format_item(&item), "Ace of Spades [Glass,Red Seal]");
    }
}
